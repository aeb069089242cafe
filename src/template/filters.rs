use minijinja::Environment;

pub use cruet::case::{kebab::to_kebab_case, snake::to_snake_case};

/// Registers the case conversion filters the bundled templates use.
///
/// `snake_case` turns a project name into a database identifier and
/// `kebab_case` into a binary name.
pub fn register(env: &mut Environment<'static>) {
    env.add_filter("snake_case", to_snake_case);
    env.add_filter("kebab_case", to_kebab_case);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(template: &str) -> String {
        let mut env = Environment::new();
        register(&mut env);
        env.render_str(template, ()).unwrap()
    }

    #[test]
    fn snake_case_makes_database_identifiers() {
        assert_eq!(render("{{ 'my-shop' | snake_case }}"), "my_shop");
        assert_eq!(render("{{ 'MyShop' | snake_case }}"), "my_shop");
    }

    #[test]
    fn kebab_case_makes_binary_names() {
        assert_eq!(render("{{ 'my_shop' | kebab_case }}"), "my-shop");
        assert_eq!(render("{{ 'MyShop' | kebab_case }}"), "my-shop");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(render("{{ '' | snake_case }}{{ '' | kebab_case }}"), "");
    }

    #[test]
    fn unknown_filters_are_not_registered() {
        let mut env = Environment::new();
        register(&mut env);
        assert!(env.render_str("{{ 'car' | plural }}", ()).is_err());
    }
}
