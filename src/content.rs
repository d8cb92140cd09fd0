//! Static page content.
//!
//! Everything the site displays is bundled into the binary: the home page
//! prose and goal lists, the blog placeholder, the about blurb, and the
//! long-form resume document that feeds the scrollable viewport. The store
//! is built once per process and shared read-only by every session.

use once_cell::sync::Lazy;

/// The resume document, embedded at compile time.
const RESUME: &str = include_str!("../content/resume.md");

/// A titled prose section on the home page.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Section heading.
    pub title: &'static str,
    /// Body paragraph, unwrapped; the render pipeline wraps it to width.
    pub body: &'static str,
}

/// A titled bullet list of goals on the home page.
#[derive(Debug, Clone, Copy)]
pub struct GoalList {
    /// List heading.
    pub title: &'static str,
    /// One entry per bullet.
    pub items: &'static [&'static str],
}

/// All page content, loaded once at process start.
#[derive(Debug)]
pub struct ContentStore {
    /// Home page prose sections, in display order.
    pub sections: &'static [Section],
    /// Home page near-term goals.
    pub near_term: GoalList,
    /// Home page longer-term goals.
    pub long_term: GoalList,
    /// The blog page placeholder line.
    pub blog: &'static str,
    /// The about page disclosure block.
    pub about: &'static str,
    /// Raw long-form resume text for the viewport.
    pub resume: &'static str,
}

static STORE: Lazy<ContentStore> = Lazy::new(|| ContentStore {
    sections: &[
        Section {
            title: "who am i?",
            body: "connor offline, connorjf/enso online",
        },
        Section {
            title: "how would i describe myself?",
            body: "engineer. tech enthusiast. outdoors lover.",
        },
        Section {
            title: "how've i gotten here?",
            body: "i went to college at the Georgia Institute of Technology for a BS in \
                   Aerospace Engineering. these days i'm working at MacStadium leading the \
                   Sales Engineering team. when i'm not at work i can be found going to edm \
                   concerts, rock climbing, sailing, or trying to figure out when i'm next \
                   going skiing.",
        },
        Section {
            title: "",
            body: "i am open to a new position in the software engineering space. you can \
                   find my resume by pressing 'r'!",
        },
        Section {
            title: "what am i up to now?",
            body: "",
        },
    ],
    near_term: GoalList {
        title: "things i'm working on",
        items: &[
            "send a v10 boulder and climb 5.13 (in the gym)",
            "learn to trad climb",
            "run a marathon (goal sub 3:30)",
            "bike a century",
            "cross country ski (classic) the american birkibeiner",
        ],
    },
    long_term: GoalList {
        title: "things i want to do longer term",
        items: &[
            "complete an ironman",
            "hike the pct",
            "learn to backcountry ski",
            "learn to sail a laser",
            "bikepack the iceland ring road",
        ],
    },
    blog: "this is where i will eventually write things",
    about: "this terminal site was built in Rust with bubbletea-rs and lipgloss! you can \
            find the source code for it at whit3rabbit/termsite\n\n\
            if you run into any issues while browsing (or weird colorings) feel free to \
            open an issue on the repo and i will do my best to fix it\n\n\
            inspiration for this site came from terminal.shop",
    resume: RESUME,
});

/// Returns the process-wide content store.
pub fn store() -> &'static ContentStore {
    &STORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_is_populated() {
        let content = store();
        assert!(!content.sections.is_empty());
        assert_eq!(content.near_term.items.len(), 5);
        assert_eq!(content.long_term.items.len(), 5);
        assert!(!content.blog.is_empty());
        assert!(!content.about.is_empty());
    }

    #[test]
    fn test_resume_is_long_form() {
        // The resume has to be long enough that a 20-row viewport scrolls.
        let lines = store().resume.lines().count();
        assert!(lines > 40, "resume only has {} lines", lines);
    }

    #[test]
    fn test_store_is_shared() {
        // Two lookups observe the same allocation.
        assert!(std::ptr::eq(store(), store()));
    }
}
