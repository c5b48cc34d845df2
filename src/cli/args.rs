//! Argument structs shared by the CLI subcommands.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(after_long_help = r#"WHAT IT DOES:
  Parses every matching source file under --dir with tree-sitter, finds all
  declarations of METHOD, and reports each one's file, 1-based line range,
  and verbatim snippet, plus the method calls made inside its own body
  (calls inside lambdas and anonymous classes it defines are excluded
  unless --include-nested is passed).

  Two same-named declarations are both reported, in file/offset order;
  a name with zero matches prints "No matches." and exits 0.

EXAMPLES:
  Where is divide() declared:    locator find divide -d src
  What does a test exercise:     locator find testDivide -d src/test
  Machine-readable output:       locator find divide -d src --json
"#)]
pub struct FindArgs {
    /// Method name to locate (exact, case-sensitive)
    pub method: String,

    /// Directory to recursively scan for source files
    #[arg(short, long, default_value = ".")]
    pub dir: String,

    /// File extensions to parse, comma-separated
    #[arg(short, long, default_value = "java")]
    pub ext: String,

    /// Also report calls made inside lambdas and anonymous classes
    /// defined by the matched method
    #[arg(long)]
    pub include_nested: bool,

    /// Number of parallel parsing threads. 0 = auto-detect CPU cores.
    #[arg(short, long, default_value = "0")]
    pub threads: usize,

    /// Emit the report as pretty JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(after_long_help = r#"WHAT IT DOES:
  Parses every matching source file under --dir and reports every method
  invocation in each file: callee name, raw receiver expression text, and
  raw argument texts. With a METHOD name, only declarations of that name
  are listed and every call is attached to the declaration containing it;
  calls outside all matched declarations are reported as unscoped.

EXAMPLES:
  Everything a test file calls:  locator calls -d src/test
  Calls grouped under helper():  locator calls helper -d src
  Skip lambda bodies:            locator calls -d src --exclude-nested
"#)]
pub struct CallsArgs {
    /// Only report declarations with this exact name (default: all methods)
    pub method: Option<String>,

    /// Directory to recursively scan for source files
    #[arg(short, long, default_value = ".")]
    pub dir: String,

    /// File extensions to parse, comma-separated
    #[arg(short, long, default_value = "java")]
    pub ext: String,

    /// Skip calls made inside lambda and anonymous-class bodies
    #[arg(long)]
    pub exclude_nested: bool,

    /// Number of parallel parsing threads. 0 = auto-detect CPU cores.
    #[arg(short, long, default_value = "0")]
    pub threads: usize,

    /// Emit the report as pretty JSON instead of text
    #[arg(long)]
    pub json: bool,
}
