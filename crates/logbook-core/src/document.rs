//! Line-based document model for journal markdown files.
//!
//! A journal document is a flat, ordered sequence of lines. Line 0 is the
//! title heading; `# LOG` and `# One-line note` headings delimit the other
//! regions. Sections are positional, not nested: content between two
//! markers belongs to the preceding marker's region.

pub const LOG_LABEL: &str = "LOG";
pub const ONE_LINE_NOTE_LABEL: &str = "One-line note";

/// Kind of a scanned document region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// Line 0, the title heading
    Title,
    /// An HTML comment line (`<!-- ... -->`)
    Comment,
    /// The first-paragraph summary
    Summary,
    /// The `# LOG` heading and its entries
    Log,
    /// The `# One-line note` heading and its bullets
    OneLineNote,
    /// Any other heading or stray content
    Other,
}

/// A half-open span of lines (`end` exclusive) tagged with a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub kind: RegionKind,
    pub start: usize,
    pub end: usize,
}

/// In-memory snapshot of one markdown file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split raw text on line boundaries. Empty input yields the empty
    /// sentinel used for nonexistent files.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        Document {
            lines: raw.split('\n').map(str::to_string).collect(),
        }
    }

    pub(crate) fn from_lines(lines: Vec<String>) -> Self {
        Document { lines }
    }

    /// Rejoin with `\n`, guaranteeing exactly one trailing newline.
    pub fn serialize(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut out = self.lines.join("\n");
        while out.ends_with('\n') {
            out.pop();
        }
        out.push('\n');
        out
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn insert_line(&mut self, index: usize, line: impl Into<String>) {
        self.lines.insert(index, line.into());
    }

    /// Replace the lines in `start..end` with `replacement`.
    pub fn splice_lines(&mut self, start: usize, end: usize, replacement: Vec<String>) {
        self.lines.splice(start..end, replacement);
    }

    /// Index of the first line whose trimmed text starts with `# {label}`.
    /// Prefix match: both `# LOG` and `# LOG (draft)` match label `LOG`.
    pub fn find_heading(&self, label: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| heading_matches(line.trim(), label))
    }

    /// Scan the document into a flat, ordered list of typed regions.
    ///
    /// The summary region follows the first-paragraph rules: blanks and
    /// comments before content are transparent, stray sub-headings ahead of
    /// the first paragraph are skipped, and a `LOG` or `One-line note`
    /// heading ends the search. Once content has started, the paragraph
    /// ends at the next blank line or heading.
    pub fn sections(&self) -> Vec<Region> {
        let mut regions = Vec::new();
        if self.lines.is_empty() {
            return regions;
        }
        regions.push(Region {
            kind: RegionKind::Title,
            start: 0,
            end: 1,
        });

        let mut summary_found = false;
        let mut summary_blocked = false;
        let mut i = 1;
        while i < self.lines.len() {
            let trimmed = self.lines[i].trim();
            if trimmed.is_empty() {
                i += 1;
                continue;
            }
            if trimmed.starts_with("<!--") {
                regions.push(Region {
                    kind: RegionKind::Comment,
                    start: i,
                    end: i + 1,
                });
                i += 1;
                continue;
            }
            if trimmed.starts_with('#') {
                i = self.scan_heading(&mut regions, i, &mut summary_found, &mut summary_blocked);
                continue;
            }
            // Content line
            if summary_found || summary_blocked {
                let end = self.next_heading_line(i);
                regions.push(Region {
                    kind: RegionKind::Other,
                    start: i,
                    end,
                });
                i = end;
                continue;
            }
            let end = self.paragraph_end(i);
            regions.push(Region {
                kind: RegionKind::Summary,
                start: i,
                end,
            });
            summary_found = true;
            i = end;
        }
        regions
    }

    fn scan_heading(
        &self,
        regions: &mut Vec<Region>,
        i: usize,
        summary_found: &mut bool,
        summary_blocked: &mut bool,
    ) -> usize {
        let trimmed = self.lines[i].trim();
        let kind = if heading_matches(trimmed, LOG_LABEL) {
            RegionKind::Log
        } else if heading_matches(trimmed, ONE_LINE_NOTE_LABEL) {
            RegionKind::OneLineNote
        } else {
            RegionKind::Other
        };
        if kind == RegionKind::Other && !*summary_found && !*summary_blocked {
            // Stray sub-heading ahead of the first paragraph; it does not
            // own the content that follows it.
            regions.push(Region {
                kind,
                start: i,
                end: i + 1,
            });
            return i + 1;
        }
        if kind != RegionKind::Other {
            *summary_blocked = true;
        }
        let end = self.next_heading_line(i + 1);
        regions.push(Region {
            kind,
            start: i,
            end,
        });
        end
    }

    /// End of the paragraph starting at `from`: the next blank line or
    /// heading. Headings terminate capture unconditionally once started.
    fn paragraph_end(&self, from: usize) -> usize {
        let mut end = from;
        while end < self.lines.len() {
            let trimmed = self.lines[end].trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                break;
            }
            end += 1;
        }
        end
    }

    /// Index of the next heading line at or after `from`, or the line
    /// count when none remains.
    pub fn next_heading_line(&self, from: usize) -> usize {
        self.lines[from.min(self.lines.len())..]
            .iter()
            .position(|line| line.trim().starts_with('#'))
            .map_or(self.lines.len(), |p| from + p)
    }

    /// Insertion index for a new LOG entry: after the `LOG` heading, past
    /// any blank lines, then past the contiguous run of existing entries.
    /// `None` if the document has no `LOG` heading.
    pub fn log_insertion_index(&self) -> Option<usize> {
        let heading = self.find_heading(LOG_LABEL)?;
        let mut i = heading + 1;
        while i < self.lines.len() && self.lines[i].trim().is_empty() {
            i += 1;
        }
        while i < self.lines.len() && !self.lines[i].trim().is_empty() {
            i += 1;
        }
        Some(i)
    }
}

fn heading_matches(trimmed: &str, label: &str) -> bool {
    trimmed
        .strip_prefix("# ")
        .is_some_and(|rest| rest.starts_with(label))
}
