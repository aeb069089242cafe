use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

/// Database drivers a generated project can be wired for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum DbDriver {
    #[default]
    Postgres,
    Mysql,
    Sqlite,
}

impl DbDriver {
    pub fn as_str(&self) -> &'static str {
        match self {
            DbDriver::Postgres => "postgres",
            DbDriver::Mysql => "mysql",
            DbDriver::Sqlite => "sqlite",
        }
    }

    /// Whether the driver talks to a separate database server.
    pub fn needs_server(&self) -> bool {
        !matches!(self, DbDriver::Sqlite)
    }
}

impl Display for DbDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Variables injected into every template.
///
/// The schema is flat and shared by all templates; a template simply ignores
/// the fields it does not use. The default value is valid and renders every
/// field as empty text or zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateData {
    #[serde(rename = "ModuleName")]
    pub module_name: String,
    #[serde(rename = "ProjectName")]
    pub project_name: String,
    #[serde(rename = "DBDriver")]
    pub db_driver: String,
    #[serde(rename = "GoVersion")]
    pub go_version: String,
    #[serde(rename = "Year")]
    pub year: i32,
}

impl TemplateData {
    pub fn new(
        project_name: impl Into<String>,
        module_name: impl Into<String>,
        db_driver: DbDriver,
        go_version: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            project_name: project_name.into(),
            db_driver: db_driver.as_str().to_string(),
            go_version: go_version.into(),
            year,
        }
    }

    /// The driver parsed back from its string form, if it is a known one.
    pub fn driver(&self) -> Option<DbDriver> {
        DbDriver::from_str(&self.db_driver, true).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_template_field_names() {
        let data = TemplateData::new("shop", "github.com/acme/shop", DbDriver::Mysql, "1.22", 2026);
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({
                "ModuleName": "github.com/acme/shop",
                "ProjectName": "shop",
                "DBDriver": "mysql",
                "GoVersion": "1.22",
                "Year": 2026,
            })
        );
    }

    #[test]
    fn default_is_zero_valued() {
        let value = serde_json::to_value(TemplateData::default()).unwrap();
        assert_eq!(value["ProjectName"], json!(""));
        assert_eq!(value["DBDriver"], json!(""));
        assert_eq!(value["Year"], json!(0));
        assert_eq!(TemplateData::default().driver(), None);
    }

    #[test]
    fn driver_round_trips_from_string() {
        let data = TemplateData::new("a", "a", DbDriver::Sqlite, "1.22", 2026);
        assert_eq!(data.driver(), Some(DbDriver::Sqlite));
        assert!(!DbDriver::Sqlite.needs_server());
        assert!(DbDriver::Postgres.needs_server());
    }
}
