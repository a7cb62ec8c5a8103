//! Routes
//!
//! Hash-based paths (`#/posts/3`) mapped to pages.

/// Resource with list/add/detail pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Recipes,
    Posts,
    Comments,
    Todos,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Recipes,
        Resource::Posts,
        Resource::Comments,
        Resource::Todos,
    ];

    pub fn segment(&self) -> &'static str {
        match self {
            Resource::Recipes => "recipes",
            Resource::Posts => "posts",
            Resource::Comments => "comments",
            Resource::Todos => "todos",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Resource::Recipes => "Recipes",
            Resource::Posts => "Posts",
            Resource::Comments => "Comments",
            Resource::Todos => "Todos",
        }
    }

    /// Heading of the error block when the list cannot be loaded
    pub fn fetch_error_label(&self) -> &'static str {
        match self {
            Resource::Recipes => "Error fetching recipes:",
            Resource::Posts => "Error fetching posts:",
            Resource::Comments => "Error fetching comments:",
            Resource::Todos => "Error fetching todos:",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.segment() == segment)
    }

    pub fn list_path(&self) -> String {
        format!("/{}", self.segment())
    }

    pub fn add_path(&self) -> String {
        format!("/{}/add", self.segment())
    }

    /// Where clicking a list row leads: edit page for recipes and todos,
    /// read-only detail otherwise
    pub fn detail_path(&self, id: u32) -> String {
        match self {
            Resource::Recipes | Resource::Todos => format!("/{}/{}/edit", self.segment(), id),
            Resource::Posts | Resource::Comments => format!("/{}/{}", self.segment(), id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List(Resource),
    Add(Resource),
    Detail(Resource, u32),
    Edit(Resource, u32),
    NotFound,
}

impl Default for Route {
    fn default() -> Self {
        Route::List(Resource::Recipes)
    }
}

impl Route {
    /// Parse a path, with or without the leading `#`
    pub fn parse(path: &str) -> Self {
        let path = path.trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let (first, rest) = match segments.split_first() {
            None => return Route::default(),
            Some((first, rest)) => (*first, rest),
        };
        let Some(resource) = Resource::from_segment(first) else {
            return Route::NotFound;
        };

        match rest {
            [] => Route::List(resource),
            ["add"] => Route::Add(resource),
            [id] => match (resource, id.parse::<u32>()) {
                (Resource::Posts | Resource::Comments, Ok(id)) => Route::Detail(resource, id),
                _ => Route::NotFound,
            },
            [id, "edit"] => match (resource, id.parse::<u32>()) {
                (Resource::Recipes | Resource::Todos, Ok(id)) => Route::Edit(resource, id),
                _ => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List(resource) => resource.list_path(),
            Route::Add(resource) => resource.add_path(),
            Route::Detail(resource, id) => format!("/{}/{}", resource.segment(), id),
            Route::Edit(resource, id) => format!("/{}/{}/edit", resource.segment(), id),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Resource whose nav tab should be highlighted
    pub fn resource(&self) -> Option<Resource> {
        match self {
            Route::List(r) | Route::Add(r) | Route::Detail(r, _) | Route::Edit(r, _) => Some(*r),
            Route::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse(""), Route::List(Resource::Recipes));
        assert_eq!(Route::parse("#/"), Route::List(Resource::Recipes));
        assert_eq!(Route::parse("#/todos"), Route::List(Resource::Todos));
        assert_eq!(Route::parse("/posts/add"), Route::Add(Resource::Posts));
        assert_eq!(Route::parse("/comments/12"), Route::Detail(Resource::Comments, 12));
        assert_eq!(Route::parse("/recipes/3/edit"), Route::Edit(Resource::Recipes, 3));
        assert_eq!(Route::parse("/todos/9/edit?from=list"), Route::Edit(Resource::Todos, 9));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Route::parse("/users"), Route::NotFound);
        assert_eq!(Route::parse("/posts/abc"), Route::NotFound);
        assert_eq!(Route::parse("/posts/3/edit"), Route::NotFound);
        assert_eq!(Route::parse("/recipes/3"), Route::NotFound);
        assert_eq!(Route::parse("/todos/1/edit/more"), Route::NotFound);
    }

    #[test]
    fn test_fetch_error_labels() {
        assert_eq!(Resource::Posts.fetch_error_label(), "Error fetching posts:");
        assert_eq!(Resource::Todos.fetch_error_label(), "Error fetching todos:");
        assert_eq!(Resource::Comments.fetch_error_label(), "Error fetching comments:");
        assert_eq!(Resource::Recipes.fetch_error_label(), "Error fetching recipes:");
    }

    #[test]
    fn test_detail_path_parses_back() {
        for resource in Resource::ALL {
            let route = Route::parse(&resource.detail_path(7));
            assert_eq!(route.resource(), Some(resource));
            assert_ne!(route, Route::NotFound);
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
