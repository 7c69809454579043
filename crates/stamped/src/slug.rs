//! Slug derivation with uniqueness enforcement.
//!
//! A slug is derived from a display name (`"Hello World!"` becomes
//! `"hello-world"`), then disambiguated against sibling records by probing
//! the store and appending a numeric suffix until a free value is found.

use std::sync::OnceLock;

use regex::Regex;
use stamped_core::{Filter, FilterSet, Record, Result, Store, Value};

/// Default ceiling on slug length, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 45;

/// Configuration for [`assign_slug`].
#[derive(Debug, Clone, PartialEq)]
pub struct SlugConfig {
    /// Field receiving the slug. Default `"slug"`.
    pub slug_field: String,
    /// Word separator in generated slugs. Default `'-'`.
    pub separator: char,
    /// Maximum slug length in characters. Default 45.
    pub max_length: usize,
    /// Extra filters scoping the uniqueness check to a sibling group.
    pub filters: FilterSet,
    /// Values the slug must avoid even when no record holds them, e.g.
    /// reserved route segments.
    pub exclude: Vec<String>,
    /// Recompute the slug even though one is already present (edit path).
    pub edit: bool,
    /// Also compute a slug for a blank field on an already-persisted record.
    pub slug_on_blank: bool,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            slug_field: "slug".to_string(),
            separator: '-',
            max_length: DEFAULT_MAX_LENGTH,
            filters: FilterSet::new(),
            exclude: Vec::new(),
            edit: false,
            slug_on_blank: false,
        }
    }
}

impl SlugConfig {
    /// Override the slug field name.
    #[must_use]
    pub fn slug_field(mut self, name: impl Into<String>) -> Self {
        self.slug_field = name.into();
        self
    }

    /// Use a different word separator, e.g. `'_'`.
    #[must_use]
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Override the maximum slug length.
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Scope uniqueness to records matching these filters.
    #[must_use]
    pub fn filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    /// Add values the generated slug must avoid.
    #[must_use]
    pub fn exclude(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exclude.extend(values.into_iter().map(Into::into));
        self
    }

    /// Request recomputation on an existing record (edit path).
    #[must_use]
    pub fn edit(mut self, edit: bool) -> Self {
        self.edit = edit;
        self
    }

    /// Also fill a blank slug on already-persisted records.
    #[must_use]
    pub fn slug_on_blank(mut self, slug_on_blank: bool) -> Self {
        self.slug_on_blank = slug_on_blank;
        self
    }
}

fn word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-z0-9]+").expect("static pattern compiles"))
}

/// Normalize a display name into a slug candidate.
///
/// Lowercases, joins alphanumeric runs with `separator`, and truncates to
/// `max_length` characters without leaving a trailing separator. Returns an
/// empty string when the name has no alphanumeric content; [`assign_slug`]
/// substitutes a random identifier in that case.
#[must_use]
pub fn slugify(name: &str, separator: char, max_length: usize) -> String {
    let lowered = name.to_lowercase();
    let joined = word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(&separator.to_string());
    truncate_slug(&joined, separator, max_length)
}

fn truncate_slug(slug: &str, separator: char, max_length: usize) -> String {
    let truncated: String = slug.chars().take(max_length).collect();
    truncated.trim_end_matches(separator).to_string()
}

fn random_slug(max_length: usize) -> String {
    let hex = uuid::Uuid::new_v4().simple().to_string();
    hex.chars().take(max_length).collect()
}

/// Compute and assign a unique slug derived from `name`.
///
/// Runs only on the creation path (no primary key yet, slug field blank),
/// on an explicit edit request (`config.edit`), or when the field is blank
/// and `config.slug_on_blank` is set; otherwise the record is left alone.
///
/// Uniqueness is checked among records matching `config.filters`, excluding
/// the record itself once it has a primary key. Collisions and excluded
/// values are resolved by appending `{separator}{n}` with `n` counting up
/// from 2, trimming the base so the result still fits `config.max_length`.
pub fn assign_slug<R, S>(record: &mut R, store: &S, name: &str, config: &SlugConfig) -> Result<()>
where
    R: Record + ?Sized,
    S: Store + ?Sized,
{
    let current = record.get(&config.slug_field).unwrap_or(Value::Null);
    let blank = current.is_blank();
    let creating = !record.is_persisted() && blank;
    if !(creating || config.edit || (blank && config.slug_on_blank)) {
        return Ok(());
    }

    let mut base = slugify(name, config.separator, config.max_length);
    if base.is_empty() {
        base = random_slug(config.max_length);
    }

    let slug = resolve_unique(record, store, &base, config)?;
    tracing::debug!(
        model = record.model_name(),
        field = %config.slug_field,
        slug = %slug,
        "assigning slug"
    );
    record.set(&config.slug_field, Value::Text(slug))
}

fn resolve_unique<R, S>(record: &R, store: &S, base: &str, config: &SlugConfig) -> Result<String>
where
    R: Record + ?Sized,
    S: Store + ?Sized,
{
    let mut scope = config.filters.clone();
    if record.is_persisted() {
        if let Some(pk) = record.primary_key() {
            scope.push(Filter::ne(record.primary_key_field(), pk));
        }
    }

    let mut candidate = base.to_string();
    let mut counter = 2u64;
    loop {
        if !config.exclude.iter().any(|v| v == &candidate) {
            let mut probe = scope.clone();
            probe.push(Filter::eq(&config.slug_field, candidate.clone()));
            if !store.exists(record.model_name(), &probe)? {
                return Ok(candidate);
            }
        }

        tracing::debug!(
            model = record.model_name(),
            candidate = %candidate,
            counter,
            "slug taken, retrying with suffix"
        );
        candidate = suffixed(base, counter, config.separator, config.max_length);
        counter += 1;
    }
}

/// Append `{separator}{counter}`, trimming the base to honor `max_length`.
fn suffixed(base: &str, counter: u64, separator: char, max_length: usize) -> String {
    let suffix = format!("{separator}{counter}");
    let room = max_length.saturating_sub(suffix.chars().count());
    let mut out = truncate_slug(base, separator, room);
    out.push_str(&suffix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stamped_core::{DynamicRecord, FilterSet, MemoryStore};

    fn stored(slug: &str) -> DynamicRecord {
        DynamicRecord::new("page").with("slug", slug)
    }

    #[test]
    fn test_slugify_lowercases_and_joins_words() {
        assert_eq!(slugify("Hello World", '-', 45), "hello-world");
        assert_eq!(slugify("  Rust & Friends!  ", '-', 45), "rust-friends");
        assert_eq!(slugify("C'est l'été", '-', 45), "c-est-l-t");
    }

    #[test]
    fn test_slugify_custom_separator() {
        assert_eq!(slugify("Hello World", '_', 45), "hello_world");
    }

    #[test]
    fn test_slugify_truncates_without_trailing_separator() {
        let name = "a very long title that keeps going and going forever";
        let slug = slugify(name, '-', 20);
        assert!(slug.chars().count() <= 20);
        assert!(!slug.ends_with('-'));
        assert_eq!(slug, "a-very-long-title-th");
    }

    #[test]
    fn test_slugify_empty_input_stays_empty() {
        assert_eq!(slugify("", '-', 45), "");
        assert_eq!(slugify("!!! ???", '-', 45), "");
    }

    #[test]
    fn test_assign_slug_on_creation() {
        let store = MemoryStore::new();
        let mut rec = DynamicRecord::new("page");
        assign_slug(&mut rec, &store, "Hello World", &SlugConfig::default()).unwrap();
        assert_eq!(rec.get("slug"), Some(Value::from("hello-world")));
    }

    #[test]
    fn test_assign_slug_skips_persisted_record_without_edit() {
        let store = MemoryStore::new();
        let mut rec = DynamicRecord::new("page").with("slug", "old-slug");
        rec.assign_key(1i64);
        assign_slug(&mut rec, &store, "New Title", &SlugConfig::default()).unwrap();
        assert_eq!(rec.get("slug"), Some(Value::from("old-slug")));
    }

    #[test]
    fn test_assign_slug_edit_recomputes() {
        let store = MemoryStore::new();
        let mut rec = DynamicRecord::new("page").with("slug", "old-slug");
        rec.assign_key(1i64);
        let config = SlugConfig::default().edit(true);
        assign_slug(&mut rec, &store, "New Title", &config).unwrap();
        assert_eq!(rec.get("slug"), Some(Value::from("new-title")));
    }

    #[test]
    fn test_assign_slug_blank_flag_fills_persisted_record() {
        let store = MemoryStore::new();
        let mut rec = DynamicRecord::new("page");
        rec.assign_key(1i64);

        assign_slug(&mut rec, &store, "Title", &SlugConfig::default()).unwrap();
        assert!(rec.get("slug").is_none());

        let config = SlugConfig::default().slug_on_blank(true);
        assign_slug(&mut rec, &store, "Title", &config).unwrap();
        assert_eq!(rec.get("slug"), Some(Value::from("title")));
    }

    #[test]
    fn test_collision_appends_numeric_suffix() {
        let mut store = MemoryStore::new();
        store.insert(stored("hello-world"));
        store.insert(stored("hello-world-2"));

        let mut rec = DynamicRecord::new("page");
        assign_slug(&mut rec, &store, "Hello World", &SlugConfig::default()).unwrap();
        assert_eq!(rec.get("slug"), Some(Value::from("hello-world-3")));
    }

    #[test]
    fn test_uniqueness_scoped_by_filters() {
        let mut store = MemoryStore::new();
        store.insert(stored("hello-world").with("section", "docs"));

        // Different section: no collision.
        let config = SlugConfig::default().filters(FilterSet::new().eq("section", "blog"));
        let mut rec = DynamicRecord::new("page");
        assign_slug(&mut rec, &store, "Hello World", &config).unwrap();
        assert_eq!(rec.get("slug"), Some(Value::from("hello-world")));

        // Same section: suffix required.
        let config = SlugConfig::default().filters(FilterSet::new().eq("section", "docs"));
        let mut rec = DynamicRecord::new("page");
        assign_slug(&mut rec, &store, "Hello World", &config).unwrap();
        assert_eq!(rec.get("slug"), Some(Value::from("hello-world-2")));
    }

    #[test]
    fn test_edit_does_not_collide_with_self() {
        let mut store = MemoryStore::new();
        let key = store.insert(stored("hello-world"));

        let mut rec = stored("hello-world");
        rec.set("id", key).unwrap();
        let config = SlugConfig::default().edit(true);
        assign_slug(&mut rec, &store, "Hello World", &config).unwrap();
        // The only record holding the slug is this one, so it keeps it.
        assert_eq!(rec.get("slug"), Some(Value::from("hello-world")));
    }

    #[test]
    fn test_excluded_values_are_avoided() {
        let store = MemoryStore::new();
        let config = SlugConfig::default().exclude(["admin", "admin-2"]);
        let mut rec = DynamicRecord::new("page");
        assign_slug(&mut rec, &store, "Admin", &config).unwrap();
        assert_eq!(rec.get("slug"), Some(Value::from("admin-3")));
    }

    #[test]
    fn test_empty_name_gets_random_identifier() {
        let store = MemoryStore::new();
        let mut rec = DynamicRecord::new("page");
        assign_slug(&mut rec, &store, "???", &SlugConfig::default()).unwrap();

        let slug = rec.get("slug").unwrap();
        let slug = slug.as_str().unwrap();
        assert!(!slug.is_empty());
        assert!(slug.chars().count() <= DEFAULT_MAX_LENGTH);
        assert!(slug.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_suffix_respects_max_length() {
        let mut store = MemoryStore::new();
        let base = slugify(
            "a very long title that keeps going and going forever",
            '-',
            DEFAULT_MAX_LENGTH,
        );
        store.insert(stored(&base));

        let mut rec = DynamicRecord::new("page");
        assign_slug(
            &mut rec,
            &store,
            "a very long title that keeps going and going forever",
            &SlugConfig::default(),
        )
        .unwrap();

        let slug = rec.get("slug").unwrap();
        let slug = slug.as_str().unwrap();
        assert!(slug.chars().count() <= DEFAULT_MAX_LENGTH);
        assert!(slug.ends_with("-2"));
    }

    #[test]
    fn test_long_collision_run_finds_double_digit_suffix() {
        let mut store = MemoryStore::new();
        store.insert(stored("post"));
        for n in 2..=10 {
            store.insert(stored(&format!("post-{n}")));
        }

        let mut rec = DynamicRecord::new("page");
        assign_slug(&mut rec, &store, "Post", &SlugConfig::default()).unwrap();
        assert_eq!(rec.get("slug"), Some(Value::from("post-11")));
    }
}
