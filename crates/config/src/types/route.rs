//! Route records decoded from the `ROUTES` variable.
//!
//! Responsibilities:
//! - Define the `Route` record and the ordered `Routes` collection.
//! - Copy each URL key into its record while decoding.
//!
//! Invariants:
//! - `Routes` preserves the key order of the source JSON object.
//! - A record keeps every field of the source object as raw JSON; the well-known
//!   fields are read through lenient accessors and never rejected for their type.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

const URL_KEY: &str = "url";

/// A single public URL and where it leads.
///
/// The record is the route object as the platform wrote it, plus a `url` key
/// holding the URL it was declared under.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    url: String,
    fields: Map<String, Value>,
}

impl Route {
    /// Build a record from one `ROUTES` entry.
    ///
    /// A value that is not a JSON object yields a record holding only its URL.
    pub fn new(url: impl Into<String>, value: Value) -> Self {
        let url = url.into();
        let mut fields = match value {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        fields.insert(URL_KEY.to_string(), Value::String(url.clone()));
        Self { url, fields }
    }

    /// The resolved public URL (the key of the route in `ROUTES`).
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether this is the project's primary route. Anything but `true` reads as false.
    pub fn primary(&self) -> bool {
        self.fields
            .get("primary")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Upstream application, e.g. `app` or `app:http`. `None` for redirects.
    pub fn upstream(&self) -> Option<&str> {
        self.str_field("upstream")
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    /// The route as written in `routes.yaml`, e.g. `https://www.{default}/`.
    pub fn original_url(&self) -> Option<&str> {
        self.str_field("original_url")
    }

    /// `upstream` or `redirect`.
    pub fn route_type(&self) -> Option<&str> {
        self.str_field("type")
    }

    /// Any field of the record, including ones this type does not name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns true if this route is served by `app_name`.
    ///
    /// Some deployment flavors report the upstream as `<app>:http`; both forms match.
    pub fn has_upstream(&self, app_name: &str) -> bool {
        match self.upstream() {
            Some(upstream) => {
                upstream == app_name
                    || upstream
                        .strip_prefix(app_name)
                        .is_some_and(|rest| rest == crate::constants::UPSTREAM_HTTP_SUFFIX)
            }
            None => false,
        }
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

impl Serialize for Route {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.fields.serialize(serializer)
    }
}

/// Routes keyed by URL, in the order the platform declared them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Routes {
    entries: Vec<Route>,
}

impl Routes {
    /// Build the collection from a decoded `ROUTES` object.
    pub fn from_json(object: Map<String, Value>) -> Self {
        let entries = object
            .into_iter()
            .map(|(url, value)| Route::new(url, value))
            .collect();
        Self { entries }
    }

    /// Look up a route by its URL.
    pub fn get(&self, url: &str) -> Option<&Route> {
        self.entries.iter().find(|route| route.url == url)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.entries.iter()
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Route::url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep the routes matching `predicate`, preserving order.
    pub(crate) fn filtered<P>(&self, predicate: P) -> Self
    where
        P: Fn(&Route) -> bool,
    {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|route| predicate(route))
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Routes {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Routes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for route in &self.entries {
            map.serialize_entry(&route.url, route)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Routes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Routes::from_json(object))
    }
}
