// oovsub-resolve: Resolve words to vector-table keys and print their vectors.
//
// Known words resolve to themselves, numeric literals to `<num>` (when the
// vocabulary has it), other words to their substitute or `<unk>`.
//
// Usage:
//   oovsub-resolve [-v VOCAB] [-s SCRIPT] [--no-vector] [WORD...]

use std::io::{self, BufRead, Write};

use oovsub_lookup::{ResolutionKind, Resolver};

fn kind_label(kind: ResolutionKind) -> &'static str {
    match kind {
        ResolutionKind::Known => "known",
        ResolutionKind::Numeric => "numeric",
        ResolutionKind::Substituted => "substituted",
        ResolutionKind::Unknown => "unknown",
    }
}

fn print_resolution(resolver: &Resolver<'_>, word: &str, with_vector: bool, out: &mut impl Write) {
    let resolution = resolver.resolve(word);
    let _ = write!(out, "{word}\t{}\t{}", resolution.key, kind_label(resolution.kind));
    if with_vector {
        match resolver.substitutor().vocabulary().vector(&resolution.key) {
            Some(vector) => {
                for component in vector {
                    let _ = write!(out, " {component}");
                }
            }
            None => {
                let _ = write!(out, " (no vector)");
            }
        }
    }
    let _ = writeln!(out);
}

fn main() {
    oovsub_cli::init_logging();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = oovsub_cli::parse_args(&raw, &[]).unwrap_or_else(|e| oovsub_cli::fatal(&e));

    if args.wants_help() {
        println!("oovsub-resolve: Resolve words to vector-table keys.");
        println!();
        println!("Usage: oovsub-resolve [-v VOCAB] [-s SCRIPT] [--no-vector] [WORD...]");
        println!();
        println!("Prints: WORD<TAB>KEY<TAB>KIND followed by the key's vector.");
        println!("If no WORD arguments are given, reads words from stdin.");
        println!();
        println!("Options:");
        println!("  -v, --vocab PATH    Vocabulary file (word2vec text format)");
        println!("  -s, --script NAME   Combining-mark rules: none, thai, unicode");
        println!("      --no-vector     Print only the key and kind");
        println!("  -h, --help          Print this help");
        return;
    }

    let with_vector = !args.has_switch(&["--no-vector"]);

    let vocabulary = oovsub_cli::load_vocabulary(args.vocab_path())
        .unwrap_or_else(|e| oovsub_cli::fatal(&e));
    let substitutor = oovsub_cli::substitutor_for(&vocabulary, args.script())
        .unwrap_or_else(|e| oovsub_cli::fatal(&e));
    let resolver = Resolver::new(substitutor);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if !word.is_empty() {
                print_resolution(&resolver, word, with_vector, &mut out);
            }
        }
    } else {
        for word in &args.words {
            print_resolution(&resolver, word, with_vector, &mut out);
        }
    }

    let _ = out.flush();
}
