// oovsub-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use oovsub_core::{CombiningMarkPredicate, NoCombiningMarks, ThaiNonInitial, UnicodeCombiningMarks};
use oovsub_lookup::{OovSubstitutor, Vocabulary};

/// Default vocabulary file name.
const VOCAB_FILE: &str = "vocab.txt";

/// Environment variable naming the vocabulary file (or its directory).
const VOCAB_ENV: &str = "OOVSUB_VOCAB_PATH";

/// Search for a vocabulary file and load it.
///
/// Search order:
/// 1. `vocab_path` argument (if provided; a file or a directory holding `vocab.txt`)
/// 2. `OOVSUB_VOCAB_PATH` environment variable
/// 3. `~/.oovsub/vocab.txt`
/// 4. `vocab.txt` in the current working directory
pub fn load_vocabulary(vocab_path: Option<&str>) -> Result<Vocabulary, String> {
    let search_paths = build_search_paths(vocab_path);

    for candidate in &search_paths {
        if candidate.is_file() {
            log::info!("loading vocabulary from {}", candidate.display());
            return read_vocabulary(candidate);
        }
    }

    Err(format!(
        "could not find a vocabulary file in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Read and parse a vocabulary file.
pub fn read_vocabulary(path: &Path) -> Result<Vocabulary, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    parse_vocabulary(&text).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Parse the word2vec text format.
///
/// Each line is a word followed by its vector components, separated by
/// whitespace. An optional first line `COUNT DIM` is skipped. Blank lines
/// are ignored. A file with words only (no components) yields a
/// membership-only vocabulary.
pub fn parse_vocabulary(text: &str) -> Result<Vocabulary, String> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .peekable();

    if let Some((_, first)) = lines.peek() {
        if is_header(first) {
            lines.next();
        }
    }

    let mut builder = None;
    for (index, line) in lines {
        let line_no = index + 1;
        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else {
            continue;
        };
        let vector = fields
            .map(|f| {
                f.parse::<f32>()
                    .map_err(|_| format!("line {line_no}: invalid vector component {f:?}"))
            })
            .collect::<Result<Vec<f32>, String>>()?;

        let builder = builder.get_or_insert_with(|| Vocabulary::builder(vector.len()));
        builder
            .insert(word, vector)
            .map_err(|e| format!("line {line_no}: {e}"))?;
    }

    Ok(builder.unwrap_or_else(|| Vocabulary::builder(0)).build())
}

/// A header is exactly two non-negative integers.
fn is_header(line: &str) -> bool {
    let fields: Vec<&str> = line.split_whitespace().collect();
    fields.len() == 2 && fields.iter().all(|f| f.parse::<usize>().is_ok())
}

/// Vocabulary files to try, most specific first.
fn build_search_paths(vocab_path: Option<&str>) -> Vec<PathBuf> {
    let explicit = vocab_path.map(PathBuf::from);
    let from_env = std::env::var_os(VOCAB_ENV).map(PathBuf::from);
    let in_home = std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".oovsub"));
    let in_cwd = std::env::current_dir().ok();

    explicit
        .into_iter()
        .chain(from_env)
        .map(|p| if p.is_dir() { p.join(VOCAB_FILE) } else { p })
        .chain(in_home.into_iter().chain(in_cwd).map(|dir| dir.join(VOCAB_FILE)))
        .collect()
}

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// An option that takes a value, as `-x VALUE`, `--long VALUE` or `--long=VALUE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueFlag {
    pub long: &'static str,
    pub short: &'static str,
}

pub const VOCAB_FLAG: ValueFlag = ValueFlag {
    long: "--vocab",
    short: "-v",
};

pub const SCRIPT_FLAG: ValueFlag = ValueFlag {
    long: "--script",
    short: "-s",
};

/// Command line split into option values, bare switches and words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    values: Vec<(&'static str, String)>,
    switches: Vec<String>,
    pub words: Vec<String>,
}

impl ParsedArgs {
    /// Last value given for the option named `long`.
    pub fn value(&self, long: &str) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(name, _)| *name == long)
            .map(|(_, v)| v.as_str())
    }

    pub fn vocab_path(&self) -> Option<&str> {
        self.value(VOCAB_FLAG.long)
    }

    pub fn script(&self) -> Option<&str> {
        self.value(SCRIPT_FLAG.long)
    }

    /// Whether any of `names` was given as a switch.
    pub fn has_switch(&self, names: &[&str]) -> bool {
        self.switches.iter().any(|s| names.contains(&s.as_str()))
    }

    pub fn wants_help(&self) -> bool {
        self.has_switch(&["-h", "--help"])
    }
}

/// Split `args` in one pass. `--vocab` and `--script` are always known;
/// `value_flags` adds the tool's own options. A value is taken verbatim,
/// even when it starts with `-`.
pub fn parse_args(args: &[String], value_flags: &[ValueFlag]) -> Result<ParsedArgs, String> {
    let known = |name: &str| {
        [VOCAB_FLAG, SCRIPT_FLAG]
            .iter()
            .chain(value_flags)
            .find(|f| f.long == name || f.short == name)
            .map(|f| f.long)
    };

    let mut parsed = ParsedArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let inline = arg
            .split_once('=')
            .filter(|(name, _)| name.starts_with("--"))
            .and_then(|(name, value)| known(name).map(|long| (long, value)));

        if let Some((long, value)) = inline {
            parsed.values.push((long, value.to_string()));
        } else if let Some(long) = known(arg.as_str()) {
            let value = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
            parsed.values.push((long, value.clone()));
        } else if arg.len() > 1 && arg.starts_with('-') {
            parsed.switches.push(arg.clone());
        } else {
            parsed.words.push(arg.clone());
        }
    }
    Ok(parsed)
}

/// Map a script name to its combining-mark predicate.
pub fn predicate_for_script(
    script: Option<&str>,
) -> Result<Box<dyn CombiningMarkPredicate + Send + Sync>, String> {
    match script.unwrap_or("none") {
        "none" => Ok(Box::new(NoCombiningMarks)),
        "thai" => Ok(Box::new(ThaiNonInitial)),
        "unicode" => Ok(Box::new(UnicodeCombiningMarks)),
        other => Err(format!(
            "unknown script {other:?} (expected one of: none, thai, unicode)"
        )),
    }
}

/// Build a substitutor for `vocabulary` using the named script's predicate.
pub fn substitutor_for<'v>(
    vocabulary: &'v Vocabulary,
    script: Option<&str>,
) -> Result<OovSubstitutor<'v>, String> {
    let predicate = predicate_for_script(script)?;
    Ok(OovSubstitutor::new(vocabulary, move |c: char| {
        predicate.is_non_initial(c)
    }))
}

/// Install the logger. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Report a fatal error under the running tool's name and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    let tool = std::env::args()
        .next()
        .and_then(|argv0| {
            Path::new(&argv0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "oovsub".to_string());
    eprintln!("{tool}: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_word2vec_with_header() {
        let vocab = parse_vocabulary("2 3\ncat 0.1 0.2 0.3\ndog 1 2 3\n").unwrap();
        assert_eq!(vocab.dimension(), 3);
        assert_eq!(vocab.word_count(), 2);
        assert_eq!(vocab.vector("dog"), Some(&[1.0, 2.0, 3.0][..]));
    }

    #[test]
    fn parse_word_list_without_vectors() {
        let vocab = parse_vocabulary("cat\n\ndog\ncatalog\n").unwrap();
        assert_eq!(vocab.dimension(), 0);
        let words: Vec<String> = vocab.words().collect();
        assert_eq!(words, vec!["cat", "dog", "catalog"]);
    }

    #[test]
    fn parse_reports_line_numbers() {
        let err = parse_vocabulary("cat 1 2\ndog 1\n").unwrap_err();
        assert!(err.starts_with("line 2:"), "{err}");
        let err = parse_vocabulary("cat 1 x\n").unwrap_err();
        assert!(err.contains("invalid vector component"), "{err}");
    }

    #[test]
    fn parse_empty_file() {
        let vocab = parse_vocabulary("").unwrap();
        assert_eq!(vocab.word_count(), 0);
    }

    #[test]
    fn header_detection() {
        assert!(is_header("400000 300"));
        assert!(!is_header("cat 1"));
        assert!(!is_header("1 2 3"));
    }

    #[test]
    fn option_forms() {
        let parsed = parse_args(&args(&["-v", "a.txt", "--script=thai", "word"]), &[]).unwrap();
        assert_eq!(parsed.vocab_path(), Some("a.txt"));
        assert_eq!(parsed.script(), Some("thai"));
        assert_eq!(parsed.words, args(&["word"]));

        let parsed = parse_args(&args(&["--vocab=b.txt", "--vocab", "c.txt"]), &[]).unwrap();
        assert_eq!(parsed.vocab_path(), Some("c.txt"));
    }

    #[test]
    fn option_value_may_look_like_a_flag() {
        let unknown = ValueFlag {
            long: "--unknown",
            short: "-u",
        };
        let parsed = parse_args(&args(&["-u", "-v", "kissa"]), &[unknown]).unwrap();
        assert_eq!(parsed.value("--unknown"), Some("-v"));
        assert_eq!(parsed.vocab_path(), None);
        assert_eq!(parsed.words, args(&["kissa"]));
    }

    #[test]
    fn missing_value_is_an_error() {
        let err = parse_args(&args(&["word", "-s"]), &[]).unwrap_err();
        assert_eq!(err, "-s requires a value");
    }

    #[test]
    fn switches_are_kept_apart() {
        let parsed = parse_args(&args(&["--detail", "-", "x"]), &[]).unwrap();
        assert!(parsed.has_switch(&["--detail"]));
        assert!(!parsed.wants_help());
        assert_eq!(parsed.words, args(&["-", "x"]));
    }

    #[test]
    fn script_selection() {
        assert!(predicate_for_script(None).is_ok());
        let thai = predicate_for_script(Some("thai")).unwrap();
        assert!(thai.is_non_initial('\u{0E34}'));
        assert!(predicate_for_script(Some("klingon")).is_err());
    }

    #[test]
    fn substitutor_uses_script() {
        let vocab = parse_vocabulary("cat\ndog\ncatalog\n").unwrap();
        let sub = substitutor_for(&vocab, Some("none")).unwrap();
        assert_eq!(sub.substitute("cats"), "cat");
    }

    #[test]
    fn help_flags() {
        assert!(parse_args(&args(&["x", "--help"]), &[]).unwrap().wants_help());
        assert!(parse_args(&args(&["-h"]), &[]).unwrap().wants_help());
        assert!(!parse_args(&args(&["word"]), &[]).unwrap().wants_help());
    }

    #[test]
    fn explicit_file_comes_first() {
        let paths = build_search_paths(Some("/nonexistent/words.txt"));
        assert_eq!(paths[0], PathBuf::from("/nonexistent/words.txt"));
        assert!(paths.last().unwrap().ends_with(VOCAB_FILE));
    }
}
