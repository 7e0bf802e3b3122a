//! Domain vocabulary: the fixed term sets every feature validates against.
//!
//! A [`Vocabulary`] is an immutable configuration object: build it once
//! ([`Vocabulary::builtin`] or [`Vocabulary::shared`]) and pass it by
//! reference into each feature. Tests construct small fixtures with
//! [`Vocabulary::empty`] and the `with_*` builders instead of patching
//! global state.

mod locator;
pub mod tables;

use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

pub use locator::{LocateError, file_uri, locate, locate_in_text, try_locate};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Vocabulary categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    System,
    PointGroup,
    Form,
    TwinLaw,
    Modification,
    Feature,
    Phenomenon,
    AmorphousSubtype,
    AmorphousShape,
    Arrangement,
    Orientation,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::System,
        Category::PointGroup,
        Category::Form,
        Category::TwinLaw,
        Category::Modification,
        Category::Feature,
        Category::Phenomenon,
        Category::AmorphousSubtype,
        Category::AmorphousShape,
        Category::Arrangement,
        Category::Orientation,
    ];

    /// Marker that opens this category's table in the vocabulary source.
    pub fn default_marker(self) -> &'static str {
        match self {
            Category::System => "static CRYSTAL_SYSTEMS:",
            Category::PointGroup => "static POINT_GROUPS:",
            Category::Form => "static NAMED_FORMS:",
            Category::TwinLaw => "static TWIN_LAWS:",
            Category::Modification => "static MODIFICATIONS:",
            Category::Feature => "static FEATURE_NAMES:",
            Category::Phenomenon => "static PHENOMENON_TYPES:",
            Category::AmorphousSubtype => "static AMORPHOUS_SUBTYPES:",
            Category::AmorphousShape => "static AMORPHOUS_SHAPES:",
            Category::Arrangement => "static AGGREGATE_ARRANGEMENTS:",
            Category::Orientation => "static AGGREGATE_ORIENTATIONS:",
        }
    }

    /// Point groups are matched exactly (`m` and `M` differ); everything
    /// else is case-insensitive.
    pub fn is_case_sensitive(self) -> bool {
        matches!(self, Category::PointGroup)
    }

    /// Human-readable category name.
    pub fn display(self) -> &'static str {
        match self {
            Category::System => "crystal system",
            Category::PointGroup => "point group",
            Category::Form => "named form",
            Category::TwinLaw => "twin law",
            Category::Modification => "modification",
            Category::Feature => "feature",
            Category::Phenomenon => "phenomenon",
            Category::AmorphousSubtype => "amorphous subtype",
            Category::AmorphousShape => "amorphous shape",
            Category::Arrangement => "aggregate arrangement",
            Category::Orientation => "aggregate orientation",
        }
    }

    fn key(self, name: &str) -> SmolStr {
        if self.is_case_sensitive() {
            SmolStr::new(name)
        } else {
            SmolStr::new(name.to_lowercase())
        }
    }
}

/// An ordered set of canonical names with optional documentation.
#[derive(Clone, Debug, Default)]
pub struct TermSet {
    entries: FxIndexMap<SmolStr, Option<Arc<str>>>,
}

impl TermSet {
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn doc(&self, key: &str) -> Option<&Arc<str>> {
        self.entries.get(key).and_then(Option::as_ref)
    }

    /// Canonical names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: SmolStr) {
        self.entries.entry(key).or_insert(None);
    }

    fn set_doc(&mut self, key: SmolStr, doc: &str) {
        self.entries.insert(key, Some(Arc::from(doc)));
    }
}

/// Where the canonical definitions of the vocabulary live, for goto-definition.
#[derive(Clone, Debug)]
pub struct VocabularySource {
    path: PathBuf,
    markers: FxIndexMap<Category, SmolStr>,
}

impl VocabularySource {
    /// A source file using the default table markers.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let markers = Category::ALL
            .iter()
            .map(|category| (*category, SmolStr::new_static(category.default_marker())))
            .collect();
        Self {
            path: path.into(),
            markers,
        }
    }

    /// Override the marker for one category.
    pub fn with_marker(mut self, category: Category, marker: impl AsRef<str>) -> Self {
        self.markers.insert(category, SmolStr::new(marker));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn marker(&self, category: Category) -> Option<&str> {
        self.markers.get(&category).map(SmolStr::as_str)
    }
}

static SHARED: LazyLock<Vocabulary> = LazyLock::new(Vocabulary::builtin);

/// The immutable vocabulary tables.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    terms: FxIndexMap<Category, TermSet>,
    point_groups_by_system: FxIndexMap<SmolStr, Vec<SmolStr>>,
    default_point_groups: FxIndexMap<SmolStr, SmolStr>,
    form_indices: FxIndexMap<SmolStr, [i8; 3]>,
    miller_indices: FxIndexMap<SmolStr, Vec<SmolStr>>,
    scales: Vec<SmolStr>,
    nested_growth_doc: Option<Arc<str>>,
    source: Option<VocabularySource>,
}

impl Vocabulary {
    /// A vocabulary with no terms and no source.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The process-wide builtin vocabulary, built on first use.
    pub fn shared() -> &'static Vocabulary {
        &SHARED
    }

    /// Build the vocabulary from the builtin tables in [`tables`].
    pub fn builtin() -> Self {
        use tables::*;

        let mut vocab = Self::empty()
            .with_terms(Category::System, CRYSTAL_SYSTEMS.iter().copied())
            .with_terms(Category::Form, NAMED_FORMS.iter().map(|(name, _)| *name))
            .with_terms(Category::TwinLaw, TWIN_LAWS.iter().copied())
            .with_terms(Category::Modification, MODIFICATIONS.iter().copied())
            .with_terms(Category::Feature, FEATURE_NAMES.iter().copied())
            .with_terms(Category::Phenomenon, PHENOMENON_TYPES.iter().copied())
            .with_terms(Category::AmorphousSubtype, AMORPHOUS_SUBTYPES.iter().copied())
            .with_terms(Category::AmorphousShape, AMORPHOUS_SHAPES.iter().copied())
            .with_terms(Category::Arrangement, AGGREGATE_ARRANGEMENTS.iter().copied())
            .with_terms(Category::Orientation, AGGREGATE_ORIENTATIONS.iter().copied());

        for (system, groups) in POINT_GROUPS {
            vocab = vocab.with_point_groups(system, groups.iter().copied());
        }
        for (system, group) in DEFAULT_POINT_GROUPS {
            vocab
                .default_point_groups
                .insert(SmolStr::new(system), SmolStr::new(group));
        }
        for (name, indices) in NAMED_FORMS {
            vocab.form_indices.insert(SmolStr::new(name), *indices);
        }
        for (system, indices) in COMMON_MILLER_INDICES {
            vocab.miller_indices.insert(
                SmolStr::new(system),
                indices.iter().map(|m| SmolStr::new(m)).collect(),
            );
        }
        vocab.scales = COMMON_SCALES.iter().map(|s| SmolStr::new(s)).collect();

        let docs: [(Category, &[(&str, &str)]); 11] = [
            (Category::System, SYSTEM_DOCS),
            (Category::PointGroup, POINT_GROUP_DOCS),
            (Category::Form, FORM_DOCS),
            (Category::TwinLaw, TWIN_LAW_DOCS),
            (Category::Modification, MODIFICATION_DOCS),
            (Category::Feature, FEATURE_DOCS),
            (Category::Phenomenon, PHENOMENON_DOCS),
            (Category::AmorphousSubtype, AMORPHOUS_SUBTYPE_DOCS),
            (Category::AmorphousShape, AMORPHOUS_SHAPE_DOCS),
            (Category::Arrangement, AGGREGATE_ARRANGEMENT_DOCS),
            (Category::Orientation, AGGREGATE_ORIENTATION_DOCS),
        ];
        for (category, table) in docs {
            for (name, doc) in table {
                vocab = vocab.with_doc(category, name, doc);
            }
        }
        vocab.nested_growth_doc = Some(Arc::from(NESTED_GROWTH_DOC));

        vocab.with_source(VocabularySource::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/src/vocab/tables.rs"
        )))
    }

    /// Add terms to a category.
    pub fn with_terms<'a>(
        mut self,
        category: Category,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let set = self.terms.entry(category).or_default();
        for name in names {
            set.insert(category.key(name));
        }
        self
    }

    /// Attach documentation to a term, adding the term if missing.
    pub fn with_doc(mut self, category: Category, name: &str, doc: &str) -> Self {
        self.terms
            .entry(category)
            .or_default()
            .set_doc(category.key(name), doc);
        self
    }

    /// Register the point groups of a system (adds the system as well).
    pub fn with_point_groups<'a>(
        mut self,
        system: &str,
        groups: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let groups: Vec<SmolStr> = groups.into_iter().map(SmolStr::new).collect();
        self = self
            .with_terms(Category::System, [system])
            .with_terms(Category::PointGroup, groups.iter().map(SmolStr::as_str));
        self.point_groups_by_system
            .entry(Category::System.key(system))
            .or_default()
            .extend(groups);
        self
    }

    /// Set where canonical definitions can be located.
    pub fn with_source(mut self, source: VocabularySource) -> Self {
        self.source = Some(source);
        self
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Check whether `name` belongs to `category`.
    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.terms
            .get(&category)
            .is_some_and(|set| set.contains(&category.key(name)))
    }

    /// Documentation for a term, if any.
    pub fn doc(&self, category: Category, name: &str) -> Option<&Arc<str>> {
        self.terms.get(&category)?.doc(&category.key(name))
    }

    /// The term set of a category (empty if the category has no terms).
    pub fn terms(&self, category: Category) -> impl Iterator<Item = &str> {
        self.terms
            .get(&category)
            .into_iter()
            .flat_map(TermSet::names)
    }

    /// Point groups belonging to a system, in table order.
    pub fn point_groups_for(&self, system: &str) -> &[SmolStr] {
        self.point_groups_by_system
            .get(system.to_lowercase().as_str())
            .map_or(&[], Vec::as_slice)
    }

    /// Check that `group` is one of the point groups of `system`.
    pub fn is_point_group_for(&self, system: &str, group: &str) -> bool {
        self.point_groups_for(system).iter().any(|g| g == group)
    }

    /// The system a point group belongs to (first match in table order).
    pub fn system_for_point_group(&self, group: &str) -> Option<&str> {
        self.point_groups_by_system
            .iter()
            .find(|(_, groups)| groups.iter().any(|g| g == group))
            .map(|(system, _)| system.as_str())
    }

    pub fn default_point_group(&self, system: &str) -> Option<&str> {
        self.default_point_groups
            .get(system.to_lowercase().as_str())
            .map(SmolStr::as_str)
    }

    /// Miller indices of a named form.
    pub fn form_indices(&self, name: &str) -> Option<[i8; 3]> {
        self.form_indices.get(name.to_lowercase().as_str()).copied()
    }

    /// Common Miller indices for a system (with braces, e.g. `{111}`).
    pub fn miller_indices_for(&self, system: &str) -> &[SmolStr] {
        self.miller_indices
            .get(system.to_lowercase().as_str())
            .map_or(&[], Vec::as_slice)
    }

    /// Common Miller indices across all systems, deduplicated, in table order.
    pub fn all_miller_indices(&self) -> Vec<&str> {
        let mut seen: FxIndexMap<&str, ()> = FxIndexMap::default();
        for indices in self.miller_indices.values() {
            for index in indices {
                seen.insert(index.as_str(), ());
            }
        }
        seen.into_keys().collect()
    }

    pub fn scales(&self) -> &[SmolStr] {
        &self.scales
    }

    pub fn nested_growth_doc(&self) -> Option<&Arc<str>> {
        self.nested_growth_doc.as_ref()
    }

    pub fn source(&self) -> Option<&VocabularySource> {
        self.source.as_ref()
    }
}
