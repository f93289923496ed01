use rustc_hash::FxHashSet;

use kv_log_macro as log;
use marquee_dom::Node;

use crate::{
    error::RouterError,
    history::{History, Location},
    route::{BoxedRoute, Params, Route},
};

/// A route pattern that can match paths and extract parameters
#[derive(Debug, Clone)]
pub struct RoutePattern {
    pattern: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Param(String),
}

impl RoutePattern {
    /// Parse a pattern like "/" or "/:id"
    pub fn parse(pattern: &str) -> Result<Self, RouterError> {
        let invalid = |reason: &str| RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        if !pattern.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let mut segments = Vec::new();
        for segment in pattern.split('/').filter(|s| !s.is_empty()) {
            if let Some(param_name) = segment.strip_prefix(':') {
                if param_name.is_empty() {
                    return Err(invalid("parameter without a name"));
                }
                if segments.contains(&Segment::Param(param_name.to_string())) {
                    return Err(invalid("parameter declared twice"));
                }
                segments.push(Segment::Param(param_name.to_string()));
            } else {
                segments.push(Segment::Literal(segment.to_string()));
            }
        }

        Ok(RoutePattern {
            pattern: pattern.to_string(),
            segments,
        })
    }

    /// Check if a path matches this pattern and extract parameters
    pub fn matches(&self, path: &str) -> Option<Params> {
        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();

        for (pattern_seg, path_seg) in self.segments.iter().zip(path_segments.iter()) {
            match pattern_seg {
                Segment::Literal(lit) => {
                    if lit != path_seg {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), path_seg.to_string());
                }
            }
        }

        Some(params)
    }

    /// Fill the pattern's parameters in to produce a concrete path
    pub fn build(&self, params: &Params) -> Option<String> {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(lit) => path.push_str(lit),
                Segment::Param(name) => path.push_str(params.get(name)?),
            }
        }

        if path.is_empty() {
            path.push('/');
        }

        Some(path)
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// The pattern with parameter names erased, so "/:id" and "/:slug" compare equal.
    fn shape(&self) -> String {
        let shape: Vec<&str> = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Literal(lit) => lit.as_str(),
                Segment::Param(_) => ":",
            })
            .collect();
        format!("/{}", shape.join("/"))
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// The route a location resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub params: Params,
    pub location: Location,
    index: usize,
}

struct RouteRecord {
    pattern: RoutePattern,
    route: BoxedRoute,
}

/// Static route table plus the history it reads locations from.
pub struct Router {
    records: Vec<RouteRecord>,
    history: History,
}

impl Router {
    pub fn new(routes: Vec<BoxedRoute>, history: History) -> Result<Self, RouterError> {
        let mut shapes = FxHashSet::default();
        let mut names = FxHashSet::default();
        let mut records = Vec::with_capacity(routes.len());

        for route in routes {
            let pattern = RoutePattern::parse(route.path())?;

            if !shapes.insert(pattern.shape()) {
                return Err(RouterError::DuplicatePath(route.path().to_string()));
            }
            if let Some(name) = route.name() {
                if !names.insert(name) {
                    return Err(RouterError::DuplicateName(name.to_string()));
                }
            }

            records.push(RouteRecord { pattern, route });
        }

        log::debug!("Router created", {
            routes: records.len(),
            base: history.base()
        });

        Ok(Router { records, history })
    }

    pub fn routes(&self) -> impl Iterator<Item = &dyn Route> + '_ {
        self.records.iter().map(|r| r.route.as_ref())
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Resolve a path (optionally carrying a query and hash) against the
    /// table. The first matching entry wins.
    pub fn resolve(&self, target: &str) -> Option<RouteMatch> {
        self.resolve_location(Location::parse(target))
    }

    pub fn resolve_location(&self, location: Location) -> Option<RouteMatch> {
        self.records
            .iter()
            .enumerate()
            .find_map(|(index, record)| {
                record.pattern.matches(&location.path).map(|params| (index, params))
            })
            .map(|(index, params)| RouteMatch {
                path: self.records[index].route.path(),
                name: self.records[index].route.name(),
                params,
                location,
                index,
            })
    }

    /// The route matching the history's current location.
    pub fn current(&self) -> Option<RouteMatch> {
        self.resolve_location(self.history.location().clone())
    }

    pub fn has_route(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.route.name() == Some(name))
    }

    /// Build the path of a named route.
    pub fn path_for(&self, name: &str, params: &Params) -> Result<String, RouterError> {
        let record = self
            .records
            .iter()
            .find(|r| r.route.name() == Some(name))
            .ok_or_else(|| RouterError::UnknownRoute(name.to_string()))?;

        if let Some(missing) = record
            .pattern
            .param_names()
            .find(|param| !params.contains_key(*param))
        {
            return Err(RouterError::MissingParam {
                route: name.to_string(),
                param: missing.to_string(),
            });
        }

        record
            .pattern
            .build(params)
            .ok_or_else(|| RouterError::UnknownRoute(name.to_string()))
    }

    /// The URL the history shows for `location`.
    pub fn href(&self, location: &Location) -> String {
        self.history.href(location)
    }

    pub(crate) async fn render(&self, matched: &RouteMatch) -> Node {
        let route = &self.records[matched.index].route;
        route.render(&matched.params, &matched.location).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path() {
        let pattern = RoutePattern::parse("/").unwrap();
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("/42").is_none());
    }

    #[test]
    fn test_single_param() {
        let pattern = RoutePattern::parse("/:id").unwrap();

        let params = pattern.matches("/123").unwrap();
        assert_eq!(params.get("id"), Some(&"123".to_string()));

        let params = pattern.matches("/abc").unwrap();
        assert_eq!(params.get("id"), Some(&"abc".to_string()));

        assert!(pattern.matches("/").is_none());
        assert!(pattern.matches("/abc/def").is_none());
    }

    #[test]
    fn test_param_is_opaque() {
        let pattern = RoutePattern::parse("/:id").unwrap();
        let params = pattern.matches("/The%20Thing").unwrap();
        assert_eq!(params.get("id"), Some(&"The%20Thing".to_string()));
    }

    #[test]
    fn test_literal_is_case_sensitive() {
        let pattern = RoutePattern::parse("/movies/:id").unwrap();
        assert!(pattern.matches("/movies/1").is_some());
        assert!(pattern.matches("/Movies/1").is_none());
    }

    #[test]
    fn test_trailing_slash() {
        let pattern = RoutePattern::parse("/:id").unwrap();
        assert!(pattern.matches("/123").is_some());
        assert!(pattern.matches("/123/").is_some());
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(matches!(
            RoutePattern::parse(":id"),
            Err(RouterError::InvalidPattern { .. })
        ));
        assert!(matches!(
            RoutePattern::parse("/:"),
            Err(RouterError::InvalidPattern { .. })
        ));
        assert!(matches!(
            RoutePattern::parse("/:id/:id"),
            Err(RouterError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_build() {
        let pattern = RoutePattern::parse("/movies/:id").unwrap();
        let mut params = Params::new();
        assert_eq!(pattern.build(&params), None);

        params.insert("id".to_string(), "42".to_string());
        assert_eq!(pattern.build(&params), Some("/movies/42".to_string()));

        let root = RoutePattern::parse("/").unwrap();
        assert_eq!(root.build(&Params::new()), Some("/".to_string()));
    }

    #[test]
    fn test_shape_ignores_param_names() {
        let a = RoutePattern::parse("/:id").unwrap();
        let b = RoutePattern::parse("/:slug/").unwrap();
        assert_eq!(a.shape(), b.shape());
        assert_ne!(a.shape(), RoutePattern::parse("/").unwrap().shape());
    }
}
