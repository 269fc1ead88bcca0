//! Requirements manifest parsing.
//!
//! Reads a pip-style requirements file and extracts the distribution
//! name of every declared package. Version specifiers, extras and
//! environment markers are dropped: the checker only compares names.
//!
//! Supported syntax:
//! - `#` comment lines and inline ` # comments`
//! - trailing `\` line continuations
//! - `-r FILE` / `--requirement FILE` includes, resolved relative to the
//!   including file and followed recursively
//! - `name @ url` direct references (the name is kept)
//!
//! Other option lines, editable installs and bare URLs or paths carry
//! no reliable name; they are recorded in [`Manifest::skipped`].

use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::{CheckerError, Result};
use crate::packages::name::normalize;

/// Inline comment: `#` at line start or after whitespace.
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s+)#.*$").expect("COMMENT must compile"));

/// Leading distribution name, followed by whatever specifier comes next.
static NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)\s*(.*)$")
        .expect("NAME must compile")
});

/// A package declared in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Name as written in the manifest.
    pub name: String,
    /// Normalized name used for comparison.
    pub normalized: String,
    /// File the requirement was declared in.
    pub source: PathBuf,
    /// 1-based line number within `source`.
    pub line: usize,
}

/// Why a manifest line did not produce a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A pip option such as `--index-url` or `-c`.
    Option,
    /// An editable install (`-e`).
    Editable,
    /// A bare URL, archive, or local path.
    DirectReference,
    /// An include whose file does not exist or cannot be read.
    MissingInclude,
    /// An include that was already being read.
    IncludeCycle,
    /// No recognizable package name.
    Unparseable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Option => "pip option",
            Self::Editable => "editable install",
            Self::DirectReference => "URL or path without a package name",
            Self::MissingInclude => "included file not found",
            Self::IncludeCycle => "include cycle",
            Self::Unparseable => "no package name found",
        };
        f.write_str(text)
    }
}

/// A manifest line that was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// File the line came from.
    pub source: PathBuf,
    /// 1-based line number within `source`.
    pub line: usize,
    /// The line as written, comments removed.
    pub text: String,
    /// Why it was ignored.
    pub reason: SkipReason,
}

/// A parsed requirements manifest.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    /// Path of the top-level manifest.
    pub path: PathBuf,
    /// Declared packages, in declaration order, without duplicates.
    pub requirements: Vec<Requirement>,
    /// Lines that were ignored.
    pub skipped: Vec<SkippedLine>,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    ///
    /// Fails only if the top-level file cannot be read; problems with
    /// included files are recorded as skipped lines.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CheckerError::ManifestReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse_str(&content, path))
    }

    /// Parse manifest content as if it had been read from `source`.
    ///
    /// Includes are resolved relative to `source`'s directory.
    pub fn parse_str(content: &str, source: &Path) -> Self {
        let mut parser = Parser::default();
        let key = include_key(source);
        parser.read.insert(key.clone());
        parser.visiting.insert(key);
        parser.parse(content, source);

        Self {
            path: source.to_path_buf(),
            requirements: parser.requirements,
            skipped: parser.skipped,
        }
    }

    /// Declared package names, as written.
    pub fn names(&self) -> Vec<&str> {
        self.requirements.iter().map(|r| r.name.as_str()).collect()
    }
}

#[derive(Default)]
struct Parser {
    /// Files on the current include chain.
    visiting: HashSet<PathBuf>,
    /// Files already parsed; including one again adds nothing.
    read: HashSet<PathBuf>,
    seen: HashSet<String>,
    requirements: Vec<Requirement>,
    skipped: Vec<SkippedLine>,
}

enum Parsed {
    Requirement(String),
    Include(String),
    Skip(SkipReason),
}

impl Parser {
    fn parse(&mut self, content: &str, source: &Path) {
        // Editors on Windows often save with a byte order mark
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        for (line_no, text) in logical_lines(content) {
            let stripped = COMMENT.replace(&text, "");
            let stripped = stripped.trim();
            if stripped.is_empty() {
                continue;
            }

            match parse_line(stripped) {
                Parsed::Requirement(name) => {
                    let normalized = normalize(&name);
                    if self.seen.insert(normalized.clone()) {
                        self.requirements.push(Requirement {
                            name,
                            normalized,
                            source: source.to_path_buf(),
                            line: line_no,
                        });
                    }
                }
                Parsed::Include(target) => self.include(&target, source, line_no, stripped),
                Parsed::Skip(reason) => self.skip(source, line_no, stripped, reason),
            }
        }
    }

    fn include(&mut self, target: &str, source: &Path, line_no: usize, text: &str) {
        let base = source.parent().unwrap_or_else(|| Path::new(""));
        let path = base.join(target);
        let key = include_key(&path);

        if self.visiting.contains(&key) {
            tracing::debug!("Skipping include cycle at {}", path.display());
            self.skip(source, line_no, text, SkipReason::IncludeCycle);
            return;
        }
        if self.read.contains(&key) {
            tracing::debug!("Already read {}", path.display());
            return;
        }

        match fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!("Reading included manifest {}", path.display());
                self.read.insert(key.clone());
                self.visiting.insert(key.clone());
                self.parse(&content, &path);
                self.visiting.remove(&key);
            }
            Err(e) => {
                tracing::debug!("Cannot read included manifest {}: {}", path.display(), e);
                self.skip(source, line_no, text, SkipReason::MissingInclude);
            }
        }
    }

    fn skip(&mut self, source: &Path, line: usize, text: &str, reason: SkipReason) {
        self.skipped.push(SkippedLine {
            source: source.to_path_buf(),
            line,
            text: text.to_string(),
            reason,
        });
    }
}

/// Identity of a manifest file for include tracking.
fn include_key(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Join `\`-continued lines, keeping the number of each logical line's
/// first physical line.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (idx, raw) in content.lines().enumerate() {
        let (start, mut buf) = pending.take().unwrap_or((idx + 1, String::new()));
        match raw.strip_suffix('\\') {
            Some(head) => {
                buf.push_str(head);
                buf.push(' ');
                pending = Some((start, buf));
            }
            None => {
                buf.push_str(raw);
                out.push((start, buf));
            }
        }
    }
    if let Some(last) = pending {
        out.push(last);
    }
    out
}

fn option_argument<'a>(line: &'a str, long: &str, short: &str) -> Option<&'a str> {
    let rest = line
        .strip_prefix(long)
        .or_else(|| line.strip_prefix(short))?;
    Some(rest.trim_start_matches([' ', '\t', '=']).trim())
}

fn parse_line(line: &str) -> Parsed {
    if line.starts_with('-') {
        if let Some(target) = option_argument(line, "--requirement", "-r") {
            return if target.is_empty() {
                Parsed::Skip(SkipReason::Unparseable)
            } else {
                Parsed::Include(target.to_string())
            };
        }
        if line.starts_with("-e") || line.starts_with("--editable") {
            return Parsed::Skip(SkipReason::Editable);
        }
        return Parsed::Skip(SkipReason::Option);
    }

    // Environment markers are not evaluated.
    let spec = line.split(';').next().unwrap_or_default().trim();

    let spec = match spec.split_once('@') {
        Some((left, _)) if left.contains("://") => return Parsed::Skip(SkipReason::DirectReference),
        Some((left, _)) => left.trim(),
        None if spec.contains("://") => return Parsed::Skip(SkipReason::DirectReference),
        None => spec,
    };

    if looks_like_path(spec) {
        return Parsed::Skip(SkipReason::DirectReference);
    }

    let Some(caps) = NAME.captures(spec) else {
        return Parsed::Skip(SkipReason::Unparseable);
    };
    let rest = caps.get(2).map_or("", |m| m.as_str());
    let spaced = spec[caps[1].len()..].starts_with(char::is_whitespace);
    // `pkg --hash=...` carries per-requirement options and no specifier
    let valid_follow = rest.is_empty()
        || rest.starts_with(['[', '(', '<', '>', '=', '!', '~', ','])
        || (spaced && rest.starts_with("--"));
    if !valid_follow {
        return Parsed::Skip(SkipReason::Unparseable);
    }

    Parsed::Requirement(caps[1].to_string())
}

fn looks_like_path(spec: &str) -> bool {
    spec.starts_with(['.', '/', '\\'])
        || spec.ends_with(".whl")
        || spec.ends_with(".tar.gz")
        || spec.ends_with(".zip")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> Manifest {
        Manifest::parse_str(content, Path::new("requirements.txt"))
    }

    #[test]
    fn plain_names() {
        let m = parse("requests\npandas\n");
        assert_eq!(m.names(), vec!["requests", "pandas"]);
        assert!(m.skipped.is_empty());
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let m = parse("# tools\n\nrequests  # http\n   \n#numpy\n");
        assert_eq!(m.names(), vec!["requests"]);
        assert!(m.skipped.is_empty());
    }

    #[test]
    fn hash_inside_token_is_not_a_comment() {
        let m = parse("pkg==1.0#notacomment\n");
        assert_eq!(m.names(), vec!["pkg"]);
    }

    #[test]
    fn version_specifiers_and_extras_are_dropped() {
        let m = parse(
            "pandas>=1.5\nrequests[socks]==2.31.0\nnumpy ~= 1.26\nblack (>=23)\nflake8!=6.0,<7\n",
        );
        assert_eq!(
            m.names(),
            vec!["pandas", "requests", "numpy", "black", "flake8"]
        );
    }

    #[test]
    fn markers_are_dropped() {
        let m = parse("tomli; python_version < \"3.11\"\n");
        assert_eq!(m.names(), vec!["tomli"]);
    }

    #[test]
    fn direct_reference_keeps_name() {
        let m = parse("mylib @ https://example.com/mylib-1.0.tar.gz\n");
        assert_eq!(m.names(), vec!["mylib"]);
    }

    #[test]
    fn bare_urls_and_paths_are_skipped() {
        let m = parse(
            "https://example.com/pkg.whl\ngit+https://git@example.com/repo.git\n./local/pkg\nthing-1.0-py3-none-any.whl\n",
        );
        assert!(m.requirements.is_empty());
        assert_eq!(m.skipped.len(), 4);
        assert!(m
            .skipped
            .iter()
            .all(|s| s.reason == SkipReason::DirectReference));
    }

    #[test]
    fn options_and_editables_are_skipped() {
        let m = parse("--index-url https://pypi.org/simple\n-c constraints.txt\n-e .\nrequests\n");
        assert_eq!(m.names(), vec!["requests"]);
        let reasons: Vec<_> = m.skipped.iter().map(|s| s.reason).collect();
        assert_eq!(
            reasons,
            vec![SkipReason::Option, SkipReason::Option, SkipReason::Editable]
        );
    }

    #[test]
    fn unparseable_line_is_skipped() {
        let m = parse("requests\nnot a package\n");
        assert_eq!(m.names(), vec!["requests"]);
        assert_eq!(m.skipped[0].reason, SkipReason::Unparseable);
        assert_eq!(m.skipped[0].line, 2);
    }

    #[test]
    fn per_requirement_options_keep_the_name() {
        let m = parse("requests --hash=sha256:abc\npkg --config-settings=x\nother -x\n");
        assert_eq!(m.names(), vec!["requests", "pkg"]);
        assert_eq!(m.skipped.len(), 1);
        assert_eq!(m.skipped[0].reason, SkipReason::Unparseable);
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let m = parse("\u{feff}numpy\nrequests\n");
        assert_eq!(m.names(), vec!["numpy", "requests"]);
        assert!(m.skipped.is_empty());
    }

    #[test]
    fn included_file_with_byte_order_mark() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "\u{feff}-r base.txt\n").unwrap();
        fs::write(temp.path().join("base.txt"), "\u{feff}flask\n").unwrap();

        let m = Manifest::load(&temp.path().join("requirements.txt")).unwrap();
        assert_eq!(m.names(), vec!["flask"]);
        assert!(m.skipped.is_empty());
    }

    #[test]
    fn duplicates_are_reported_once() {
        let m = parse("Requests\nrequests>=2\nPyYAML\npyyaml\n");
        assert_eq!(m.names(), vec!["Requests", "PyYAML"]);
    }

    #[test]
    fn line_continuations_are_joined() {
        let m = parse("requests==2.31.0 \\\n    --hash=sha256:abc\nnumpy\n");
        assert_eq!(m.names(), vec!["requests", "numpy"]);
        assert_eq!(m.requirements[1].line, 3);
    }

    #[test]
    fn records_line_numbers() {
        let m = parse("# header\n\nrequests\n");
        assert_eq!(m.requirements[0].line, 3);
        assert_eq!(m.requirements[0].normalized, "requests");
    }

    #[test]
    fn load_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let result = Manifest::load(&temp.path().join("requirements.txt"));
        assert!(matches!(result, Err(CheckerError::ManifestReadError { .. })));
    }

    #[test]
    fn load_follows_includes() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("reqs")).unwrap();
        fs::write(
            temp.path().join("requirements.txt"),
            "-r reqs/base.txt\npytest\n",
        )
        .unwrap();
        fs::write(temp.path().join("reqs/base.txt"), "requests\n--requirement=extra.txt\n")
            .unwrap();
        fs::write(temp.path().join("reqs/extra.txt"), "numpy\n").unwrap();

        let m = Manifest::load(&temp.path().join("requirements.txt")).unwrap();
        assert_eq!(m.names(), vec!["requests", "numpy", "pytest"]);
        assert!(m.requirements[1].source.ends_with("extra.txt"));
    }

    #[test]
    fn include_cycle_is_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "-r b.txt\nrequests\n").unwrap();
        fs::write(temp.path().join("b.txt"), "-r a.txt\nnumpy\n").unwrap();

        let m = Manifest::load(&temp.path().join("a.txt")).unwrap();
        assert_eq!(m.names(), vec!["numpy", "requests"]);
        assert_eq!(m.skipped.len(), 1);
        assert_eq!(m.skipped[0].reason, SkipReason::IncludeCycle);
    }

    #[test]
    fn shared_include_is_not_a_cycle() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "-r a.txt\n-r b.txt\n").unwrap();
        fs::write(temp.path().join("a.txt"), "-r common.txt\nrequests\n").unwrap();
        fs::write(temp.path().join("b.txt"), "-r common.txt\nnumpy\n").unwrap();
        fs::write(temp.path().join("common.txt"), "six\n").unwrap();

        let m = Manifest::load(&temp.path().join("requirements.txt")).unwrap();
        assert_eq!(m.names(), vec!["six", "requests", "numpy"]);
        assert!(m.skipped.is_empty());
    }

    #[test]
    fn missing_include_is_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "-r nope.txt\nrequests\n").unwrap();

        let m = Manifest::load(&temp.path().join("requirements.txt")).unwrap();
        assert_eq!(m.names(), vec!["requests"]);
        assert_eq!(m.skipped[0].reason, SkipReason::MissingInclude);
    }

    #[test]
    fn skip_reason_display() {
        assert_eq!(SkipReason::Editable.to_string(), "editable install");
        assert_eq!(SkipReason::IncludeCycle.to_string(), "include cycle");
    }
}
