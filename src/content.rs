//! Static portfolio copy and project data.
//!
//! Everything the page says lives here, so the components stay pure
//! plumbing. Highlight terms must appear verbatim in their text (the
//! typewriter wraps them as they complete mid-animation).

use folio_core::carousel::ProjectInfo;
use folio_core::typing::TypewriterScript;

pub const OWNER_NAME: &str = "Maya Lindqvist";
pub const OWNER_EMAIL: &str = "hello@mayalindqvist.dev";

pub const HERO_SCRIPT: TypewriterScript = TypewriterScript {
    headline: "A Software Engineer Specializing in Systems and Interface Development",
    headline_highlights: &["Software Engineer", "Systems", "Interface"],
    description: "I'm Maya Lindqvist, a software engineer with a soft spot for \
        resilient distributed systems and careful interface work. I've spent the \
        last decade building local-first tools, developer platforms, and the \
        occasional embedded oddity, and I care most about software that keeps working \
        when the network does not.",
    description_highlights: &["Maya Lindqvist", "local-first tools", "keeps working"],
};

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I started out writing firmware for forestry sensors in the north of Sweden, \
     where a failed deploy meant a four-hour drive. That taught me to treat \
     reliability as a feature, not an afterthought, and it still shapes how I \
     build everything from sync engines to dashboards.",
    "These days I split my time between systems work in Rust and the interface \
     layer that makes it humane. I like owning a feature end to end: the storage \
     format, the protocol, the pixels, and the operations story.",
];

pub const SKILLS: &[&str] = &[
    "Rust",
    "TypeScript",
    "Distributed Systems",
    "PostgreSQL",
    "WebAssembly",
    "Embedded Linux",
];

pub const PROJECTS: &[ProjectInfo] = &[
    ProjectInfo {
        id: "driftnote",
        title: "Driftnote",
        summary: "A local-first field journal that syncs opportunistically over \
            whatever link is available. CRDT merge core, append-only storage, and \
            a deliberately boring UI that works with gloves on.",
        tech: &["Rust", "CRDTs", "SQLite"],
        images: &[
            "assets/projects/driftnote-journal.png",
            "assets/projects/driftnote-sync.png",
            "assets/projects/driftnote-map.png",
        ],
        repo_url: Some("https://github.com/mlindqvist/driftnote"),
    },
    ProjectInfo {
        id: "relaywatch",
        title: "Relaywatch",
        summary: "Monitoring for long-haul packet relays: a collector daemon, a \
            ring-buffer time series store, and an alerting pipeline that fits on a \
            single small VM.",
        tech: &["Rust", "Tokio", "Grafana"],
        images: &[
            "assets/projects/relaywatch-dashboard.png",
            "assets/projects/relaywatch-alerts.png",
        ],
        repo_url: Some("https://github.com/mlindqvist/relaywatch"),
    },
    ProjectInfo {
        id: "inkboard",
        title: "Inkboard",
        summary: "An e-paper status board for the studio wall. Renders the week's \
            plan overnight and sips a coin cell for months; the layout engine is a \
            tiny constraint solver.",
        tech: &["Rust", "no_std", "E-paper"],
        images: &["assets/projects/inkboard-wall.png"],
        repo_url: None,
    },
];
