//! Routes
//!
//! Hash-based route table for the shop shell.

/// A resolved location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Products,
    /// Raw id segment; the detail view decides whether it exists
    ProductDetail(String),
    Todos,
}

impl Route {
    /// Resolve a path or hash. Unknown paths resolve to the product list.
    pub fn parse(path: &str) -> Self {
        let path = path.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["products"] => Route::Products,
            ["products", id] => Route::ProductDetail((*id).to_string()),
            ["todos"] => Route::Todos,
            _ => Route::Products,
        }
    }

    /// Canonical path
    pub fn path(&self) -> String {
        match self {
            Route::Products => "/products".to_string(),
            Route::ProductDetail(id) => format!("/products/{}", id),
            Route::Todos => "/todos".to_string(),
        }
    }

    /// Link target for an anchor
    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }

    /// True if `hash` already names this route canonically
    pub fn is_canonical(&self, hash: &str) -> bool {
        hash == self.href()
    }

    /// Which nav link is highlighted
    pub fn section(&self) -> Section {
        match self {
            Route::Products | Route::ProductDetail(_) => Section::Products,
            Route::Todos => Section::Todos,
        }
    }
}

/// Top-level navigation sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Products,
    Todos,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Products, Section::Todos];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Products => "Products",
            Section::Todos => "Todos",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Section::Products => Route::Products,
            Section::Todos => Route::Todos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("#/products"), Route::Products);
        assert_eq!(Route::parse("#/todos"), Route::Todos);
        assert_eq!(Route::parse("/todos/"), Route::Todos);
        assert_eq!(
            Route::parse("#/products/3"),
            Route::ProductDetail("3".to_string())
        );
    }

    #[test]
    fn test_root_and_unknown_redirect_to_products() {
        assert_eq!(Route::parse(""), Route::Products);
        assert_eq!(Route::parse("#/"), Route::Products);
        assert_eq!(Route::parse("#/nope"), Route::Products);
        assert_eq!(Route::parse("#/todos/1"), Route::Products);
        assert_eq!(Route::parse("#/products/1/extra"), Route::Products);
    }

    #[test]
    fn test_canonical_href() {
        assert_eq!(Route::Todos.href(), "#/todos");
        assert_eq!(Route::ProductDetail("7".to_string()).href(), "#/products/7");
        assert!(Route::parse("#/todos").is_canonical("#/todos"));
        assert!(!Route::parse("#/").is_canonical("#/"));
        assert!(!Route::parse("#/todos/").is_canonical("#/todos/"));
    }

    #[test]
    fn test_sections() {
        assert_eq!(Route::ProductDetail("1".to_string()).section(), Section::Products);
        assert_eq!(Route::Todos.section(), Section::Todos);
        assert_eq!(Section::Todos.route(), Route::Todos);
    }
}
