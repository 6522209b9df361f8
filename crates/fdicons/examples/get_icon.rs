//! Look up an icon from the installed themes.
//!
//! ```text
//! cargo run --example get_icon -- [-i] [-S scale] [-x ext,...] [-t theme] SIZE NAME...
//! ```
//!
//! Set `RUST_LOG=fdicons=debug` to trace the search.

use std::process::ExitCode;

use fdicons::{Criteria, IconDatabase};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: get_icon [-i] [-S scale] [-x ext,...] [-t theme] SIZE NAME...";

struct Args {
    info: bool,
    scale: u32,
    extensions: Vec<String>,
    theme: Option<String>,
    size: u32,
    names: Vec<String>,
}

fn parse_args(mut args: pico_args::Arguments) -> Result<Args, pico_args::Error> {
    let info = args.contains("-i");
    let scale: u32 = args.opt_value_from_str("-S")?.unwrap_or(1);
    let extensions: Vec<String> = args
        .opt_value_from_str::<_, String>("-x")?
        .map(|list| list.split(',').map(str::to_string).collect())
        .unwrap_or_default();
    let theme: Option<String> = args.opt_value_from_str("-t")?;

    let size: u32 = args.free_from_str()?;
    if size == 0 {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: "size must be positive".to_string(),
        });
    }

    let names = args
        .finish()
        .into_iter()
        .map(|name| name.into_string().map_err(|_| pico_args::Error::NonUtf8Argument))
        .collect::<Result<Vec<_>, _>>()?;
    if names.is_empty() {
        return Err(pico_args::Error::MissingArgument);
    }

    Ok(Args {
        info,
        scale,
        extensions,
        theme,
        size,
        names,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut pargs = pico_args::Arguments::from_env();
    if pargs.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }
    let args = match parse_args(pargs) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let mut database = IconDatabase::new();
    database.add_default_paths();

    let mut criteria = Criteria::new(args.names, args.size)
        .with_scale(args.scale)
        .with_extensions(args.extensions);
    if let Some(name) = &args.theme {
        match database.theme(name) {
            Some(theme) => criteria = criteria.with_theme(theme.id()),
            None => eprintln!("theme '{name}' not installed, using default"),
        }
    }

    let Some(icon) = database.resolve(&criteria) else {
        eprintln!("no icon found for {:?}", criteria.names);
        return ExitCode::FAILURE;
    };

    println!("{}", icon.path.display());
    if args.info {
        println!("name:      {}", icon.label());
        if let Some(theme) = icon.theme(&database) {
            println!("theme:     {} ({})", theme.label(), theme.path.display());
        }
        if let Some(dir) = icon.directory(&database) {
            println!("directory: {}", dir.name);
            println!("size:      {}@{}", dir.size, dir.scale);
            println!("type:      {}", dir.directory_type);
            if let Some(context) = &dir.context {
                println!("context:   {context}");
            }
        }
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    fn parse(args: &[&str]) -> Result<Args, pico_args::Error> {
        parse_args(pico_args::Arguments::from_vec(
            args.iter().map(|a| OsString::from(*a)).collect(),
        ))
    }

    #[test]
    fn test_flags_and_names() {
        let args = parse(&[
            "-i", "-S", "2", "-x", "svg,png", "-t", "Adwaita", "48", "firefox", "web-browser",
        ])
        .unwrap();
        assert!(args.info);
        assert_eq!(args.scale, 2);
        assert_eq!(args.extensions, vec!["svg", "png"]);
        assert_eq!(args.theme.as_deref(), Some("Adwaita"));
        assert_eq!(args.size, 48);
        assert_eq!(args.names, vec!["firefox", "web-browser"]);
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["16", "folder"]).unwrap();
        assert!(!args.info);
        assert_eq!(args.scale, 1);
        assert!(args.extensions.is_empty());
        assert!(args.theme.is_none());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(&["16"]).is_err());
        assert!(parse(&["0", "folder"]).is_err());
        assert!(parse(&["big", "folder"]).is_err());
        assert!(parse(&["-S", "x", "16", "folder"]).is_err());
    }
}
