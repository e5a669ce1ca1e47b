//! # Reconciliation Engine
//!
//! Holds the full ordered content of the sources list file as a sequence of
//! parsed directives and opaque text lines, identifies which directives
//! belong to the managed vendor repository, and computes the minimal set of
//! field changes needed to reach a desired state.
//!
//! ## Process
//!
//! 1. **Identify**: scan the entries in order and assign at most one entry
//!    per directive kind (`deb`, `deb-src`) as "ours", by exact URL match.
//!    Two simultaneously enabled matches of the same kind are a
//!    misconfiguration and abort the run.
//!
//! 2. **Mutate**: update the release field, append entries for kinds that
//!    have none, and flip the enabled flag when the operator asked for it.
//!    Every mutation is compared against the current value first, so the
//!    engine knows whether anything actually changed.
//!
//! 3. **Write-back decision**: [`Reconciler::should_write`] is true only when
//!    some mutation took effect, letting the caller skip the rewrite and
//!    report "not modified" accurately.
//!
//! Unmanaged lines are never touched; they travel through the run verbatim.

use log::debug;

use crate::error::{Error, Result};
use crate::line::{EntryKind, SourceLine};

/// One line of the list file: either a parsed directive or opaque text.
///
/// The variant is explicit so that rendering is exhaustive; there is no
/// "try to render, fall back to raw" dispatch anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A recognized `deb`/`deb-src` directive.
    Directive(SourceLine),
    /// Any other line (blank, free comment, unrelated directive), carried
    /// through byte-for-byte.
    Raw(String),
}

impl Entry {
    /// Classify one line of input.
    ///
    /// Parse failures are absorbed here: a line that is not a directive
    /// becomes [`Entry::Raw`] and is otherwise ignored by the engine.
    pub fn from_line(text: &str) -> Entry {
        match SourceLine::parse(text) {
            Ok(line) => Entry::Directive(line),
            Err(_) => Entry::Raw(text.to_string()),
        }
    }

    /// The text form of the entry, without a trailing newline.
    pub fn render(&self) -> String {
        match self {
            Entry::Directive(line) => line.render(),
            Entry::Raw(text) => text.clone(),
        }
    }
}

/// Back-references into the entry list for "our" entries, one per kind.
///
/// Deliberately an explicit two-field struct rather than a map keyed by
/// [`EntryKind`], so that handling of both kinds stays exhaustiveness-checked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ManagedSlots {
    binary: Option<usize>,
    source: Option<usize>,
}

impl ManagedSlots {
    fn get(&self, kind: EntryKind) -> Option<usize> {
        match kind {
            EntryKind::Binary => self.binary,
            EntryKind::Source => self.source,
        }
    }

    fn set(&mut self, kind: EntryKind, index: usize) {
        match kind {
            EntryKind::Binary => self.binary = Some(index),
            EntryKind::Source => self.source = Some(index),
        }
    }

    /// Indices of all assigned entries, binary slot first.
    fn indices(&self) -> impl Iterator<Item = usize> {
        [self.binary, self.source].into_iter().flatten()
    }
}

/// The reconciliation engine for one run.
///
/// Owns the ordered entries read from the list file plus the managed-slot
/// assignments, and tracks which categories of change took effect. Both are
/// discarded after the run; the only persistent state is the file itself.
#[derive(Debug)]
pub struct Reconciler {
    entries: Vec<Entry>,
    slots: ManagedSlots,
    vendor_url: String,
    vendor_components: Vec<String>,
    added: bool,
    release_changed: bool,
    enabled_changed: bool,
}

impl Reconciler {
    /// Build a reconciler over `entries`, identifying the vendor's entries.
    ///
    /// A directive is a candidate "ours" entry iff its URL equals
    /// `vendor_url` exactly. Per kind, the first candidate found is assigned;
    /// a later *enabled* candidate replaces a *disabled* assignment. Two
    /// enabled candidates of the same kind fail with [`Error::Conflict`]:
    /// that is a genuine misconfiguration which must not be silently
    /// resolved. Among disabled candidates the first one found stays
    /// assigned; this scan-order tie-break is relied on for idempotence.
    pub fn new(
        entries: Vec<Entry>,
        vendor_url: impl Into<String>,
        vendor_components: &[&str],
    ) -> Result<Reconciler> {
        let vendor_url = vendor_url.into();
        let slots = identify(&entries, &vendor_url)?;
        Ok(Reconciler {
            entries,
            slots,
            vendor_url,
            vendor_components: vendor_components.iter().map(|c| (*c).to_string()).collect(),
            added: false,
            release_changed: false,
            enabled_changed: false,
        })
    }

    /// Synthesize an enabled entry for every kind that has none yet.
    ///
    /// New entries use the vendor URL, the given release and the vendor's
    /// fixed component list, and are appended after all existing lines.
    /// Returns whether anything was added.
    pub fn add_missing(&mut self, release: &str) -> bool {
        let mut added = false;
        for kind in EntryKind::ALL {
            if self.slots.get(kind).is_some() {
                continue;
            }
            debug!("no {} entry for {}, appending one", kind, self.vendor_url);
            self.entries.push(Entry::Directive(SourceLine {
                enabled: true,
                kind,
                url: self.vendor_url.clone(),
                release: release.to_string(),
                components: self.vendor_components.clone(),
            }));
            self.slots.set(kind, self.entries.len() - 1);
            added = true;
        }
        self.added |= added;
        added
    }

    /// Point every managed entry at `release`; returns whether any changed.
    pub fn set_release(&mut self, release: &str) -> bool {
        let changed = self.for_each_managed(|line| {
            if line.release == release {
                return false;
            }
            debug!("updating {} entry release {} -> {}", line.kind, line.release, release);
            line.release = release.to_string();
            true
        });
        self.release_changed |= changed;
        changed
    }

    /// Set the enabled flag on every managed entry; returns whether any
    /// changed. Only called when the operator explicitly requested a state
    /// change; otherwise the flag is left exactly as found.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.for_each_managed(|line| {
            if line.enabled == enabled {
                return false;
            }
            line.enabled = enabled;
            true
        });
        self.enabled_changed |= changed;
        changed
    }

    /// Whether the file needs rewriting: true iff entries were added, a
    /// release was updated, or an enabled flag was flipped.
    pub fn should_write(&self) -> bool {
        self.added || self.release_changed || self.enabled_changed
    }

    /// True iff `add_missing` appended at least one entry.
    pub fn added(&self) -> bool {
        self.added
    }

    /// True iff `set_release` updated at least one entry.
    pub fn release_changed(&self) -> bool {
        self.release_changed
    }

    /// True iff `set_enabled` flipped at least one entry.
    pub fn enabled_changed(&self) -> bool {
        self.enabled_changed
    }

    /// The full ordered entry list, unmanaged lines included.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Apply `mutate` to each managed entry; true iff any call returned true.
    fn for_each_managed(&mut self, mut mutate: impl FnMut(&mut SourceLine) -> bool) -> bool {
        let mut changed = false;
        for index in self.slots.indices() {
            if let Entry::Directive(line) = &mut self.entries[index] {
                changed |= mutate(line);
            }
        }
        changed
    }
}

/// Scan `entries` in order and assign the managed slot for each kind.
fn identify(entries: &[Entry], vendor_url: &str) -> Result<ManagedSlots> {
    let mut slots = ManagedSlots::default();
    for (index, entry) in entries.iter().enumerate() {
        let Entry::Directive(line) = entry else {
            continue;
        };
        if line.url != vendor_url {
            continue;
        }
        match slots.get(line.kind) {
            None => slots.set(line.kind, index),
            Some(current) => {
                // Slots are only ever assigned at directive positions.
                let Some(Entry::Directive(assigned)) = entries.get(current) else {
                    continue;
                };
                if line.enabled && assigned.enabled {
                    return Err(Error::Conflict {
                        kind: line.kind,
                        url: vendor_url.to_string(),
                    });
                }
                if line.enabled && !assigned.enabled {
                    // Prefer an enabled line as the authoritative entry.
                    slots.set(line.kind, index);
                }
            }
        }
    }
    Ok(slots)
}
