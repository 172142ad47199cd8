//! Provider registry: ordered host matchers paired with extractors.
//!
//! Order is significant. [`Registry::lookup`] returns the first entry with a
//! matching [`DomainMatcher`]; later entries are never consulted, even when
//! they would match too.

use std::sync::LazyLock;

use super::extractors as ex;
use super::matcher::DomainMatcher;
use super::tables::is_ats;
use crate::domain::entities::{NormalizedUrl, RawExtraction};

/// Reads provider-specific fields from a posting URL.
pub type Extractor = fn(&NormalizedUrl) -> RawExtraction;

/// One provider known to the registry.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    /// Provider name, as reported in deduced fields.
    pub name: &'static str,
    pub matchers: Vec<DomainMatcher>,
    pub extract: Extractor,
}

impl RegistryEntry {
    pub fn new(name: &'static str, matchers: Vec<DomainMatcher>, extract: Extractor) -> Self {
        Self {
            name,
            matchers,
            extract,
        }
    }

    /// Whether any matcher recognizes `host`.
    pub fn matches(&self, host: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(host))
    }

    /// Whether the provider is an applicant-tracking system rather than a board.
    pub fn is_ats(&self) -> bool {
        is_ats(self.name)
    }
}

/// Ordered list of provider entries.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    pub fn new(entries: Vec<RegistryEntry>) -> Self {
        Self { entries }
    }

    /// First entry, in registry order, that recognizes `host`.
    pub fn lookup(&self, host: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|entry| entry.matches(host))
    }

    /// Entries in precedence order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static BUILTIN: LazyLock<Registry> = LazyLock::new(builtin_registry);

/// The compiled-in provider registry.
pub fn registry() -> &'static Registry {
    &BUILTIN
}

fn builtin_registry() -> Registry {
    use DomainMatcher::{Exact, Suffix};
    let pattern = DomainMatcher::pattern;

    Registry::new(vec![
        RegistryEntry::new(
            "weworkremotely",
            vec![Suffix("weworkremotely.com")],
            ex::weworkremotely,
        ),
        RegistryEntry::new(
            "dynamitejobs",
            vec![Suffix("dynamitejobs.com")],
            ex::dynamitejobs,
        ),
        RegistryEntry::new("linkedin", vec![Suffix("linkedin.com")], ex::linkedin),
        RegistryEntry::new(
            "wellfound",
            vec![Suffix("wellfound.com"), Suffix("angel.co")],
            ex::wellfound,
        ),
        RegistryEntry::new("join", vec![Suffix("join.com")], ex::join),
        RegistryEntry::new("remotive", vec![Suffix("remotive.com")], ex::remotive),
        RegistryEntry::new(
            "ziprecruiter",
            vec![Suffix("ziprecruiter.com")],
            ex::ziprecruiter,
        ),
        RegistryEntry::new(
            "indeed",
            vec![
                Suffix("indeed.com"),
                Suffix("indeed.co.uk"),
                Suffix("indeed.de"),
                Suffix("indeed.fr"),
                Suffix("indeed.nl"),
                Suffix("indeed.es"),
                Suffix("indeed.it"),
                Suffix("indeed.ie"),
                Suffix("indeed.ca"),
            ],
            ex::indeed,
        ),
        RegistryEntry::new(
            "stepstone",
            vec![
                Suffix("stepstone.de"),
                Suffix("stepstone.fr"),
                Suffix("stepstone.nl"),
                Suffix("stepstone.co.uk"),
                Suffix("stepstone.com"),
            ],
            ex::stepstone,
        ),
        RegistryEntry::new("xing", vec![Suffix("xing.com")], ex::xing),
        RegistryEntry::new(
            "glassdoor",
            vec![
                Suffix("glassdoor.com"),
                Suffix("glassdoor.de"),
                Suffix("glassdoor.co.uk"),
                Suffix("glassdoor.fr"),
            ],
            ex::glassdoor,
        ),
        RegistryEntry::new(
            "monster",
            vec![
                Suffix("monster.com"),
                Suffix("monster.de"),
                Suffix("monster.co.uk"),
                Suffix("monster.fr"),
                Suffix("monster.it"),
            ],
            ex::monster,
        ),
        RegistryEntry::new(
            "workday",
            vec![pattern(r"\.myworkdayjobs\.com$")],
            ex::workday,
        ),
        RegistryEntry::new(
            "greenhouse",
            vec![Suffix("boards.greenhouse.io"), Suffix("greenhouse.io")],
            ex::greenhouse,
        ),
        RegistryEntry::new("lever", vec![pattern(r"\.lever\.co$")], ex::lever),
        RegistryEntry::new(
            "personio",
            vec![
                pattern(r"\.jobs\.personio\.de$"),
                pattern(r"\.jobs\.personio\.com$"),
            ],
            ex::personio,
        ),
        RegistryEntry::new(
            "smartrecruiters",
            vec![
                Exact("careers.smartrecruiters.com"),
                Exact("jobs.smartrecruiters.com"),
            ],
            ex::smartrecruiters,
        ),
        RegistryEntry::new(
            "teamtailor",
            vec![pattern(r"\.teamtailor\.com$")],
            ex::teamtailor,
        ),
        RegistryEntry::new(
            "workable",
            vec![pattern(r"\.applytojob\.com$"), pattern(r"\.workable\.com$")],
            ex::workable,
        ),
        RegistryEntry::new("jazzhr", vec![pattern(r"\.jazz\.co$")], ex::jazzhr),
        RegistryEntry::new("ashby", vec![pattern(r"\.ashbyhq\.com$")], ex::ashby),
        RegistryEntry::new(
            "recruitee",
            vec![pattern(r"\.recruitee\.com$")],
            ex::recruitee,
        ),
        RegistryEntry::new(
            "bamboohr",
            vec![pattern(r"\.bamboohr\.com$")],
            ex::bamboohr,
        ),
        RegistryEntry::new(
            "icims",
            vec![Suffix("careers.icims.com"), Suffix("icims.com")],
            ex::icims,
        ),
        RegistryEntry::new("jobvite", vec![pattern(r"\.jobvite\.com$")], ex::jobvite),
        RegistryEntry::new("breezyhr", vec![pattern(r"\.breezy\.hr$")], ex::breezyhr),
        RegistryEntry::new("comeet", vec![pattern(r"\.comeet\.co$")], ex::comeet),
        RegistryEntry::new(
            "pinpoint",
            vec![pattern(r"\.pinpoint\.jobs$")],
            ex::pinpoint,
        ),
        RegistryEntry::new("reed", vec![Suffix("reed.co.uk")], ex::reed),
        RegistryEntry::new(
            "totaljobs",
            vec![
                Suffix("totaljobs.com"),
                Suffix("totaljobs.com.au"),
                Suffix("cwjobs.co.uk"),
            ],
            ex::totaljobs,
        ),
        RegistryEntry::new(
            "cv-library",
            vec![Suffix("cv-library.co.uk")],
            ex::cv_library,
        ),
        RegistryEntry::new(
            "nofluffjobs",
            vec![Suffix("nofluffjobs.com")],
            ex::nofluffjobs,
        ),
        RegistryEntry::new("pracuj", vec![Suffix("pracuj.pl")], ex::pracuj),
    ])
}
