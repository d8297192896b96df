use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Component, Path, PathBuf},
    sync::OnceLock,
};

use anyhow::{Result, bail};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        MockDocument, TranslationBundle,
        file_scanner::scan_mock_files,
        parsers::{json::parse_mock_file, load_bundle},
    },
    issues::ParseErrorIssue,
    rules::IgnoreList,
};

/// Parsed mock documents plus the files that failed to parse.
struct ParsedMocks {
    documents: BTreeMap<String, MockDocument>,
    errors: Vec<ParseErrorIssue>,
}

/// Analysis context for one run.
///
/// Holds the merged configuration, the translation bundle and ignore list
/// (both immutable for the run), and the discovered mock files. Mock files
/// are parsed lazily, in parallel, on first access to `documents()`.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--bundle i18n/login.properties`)
/// 2. `.mocklintrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Directory walked for mock files.
    pub mocks_dir: PathBuf,

    /// All mock files to check, sorted.
    pub files: BTreeSet<String>,

    pub bundle: TranslationBundle,

    pub ignore_list: IgnoreList,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    parsed: OnceLock<ParsedMocks>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - The mocks directory doesn't exist
    /// - The translation bundle cannot be read or parsed
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;

        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;

        // CLI > config file > defaults
        if let Some(ref mocks_root) = common_args.mocks_root {
            config.mocks_root = mocks_root.to_string_lossy().to_string();
        }
        if let Some(ref bundle) = common_args.bundle {
            config.bundle = bundle.to_string_lossy().to_string();
        }
        if let Some(ref bundle_name) = common_args.bundle_name {
            config.bundle_name = bundle_name.clone();
        }
        config
            .ignore_keys
            .extend(common_args.ignore_keys.iter().cloned());

        let mocks_dir = resolve_path(&root_dir, &config.mocks_root);
        if !mocks_dir.is_dir() {
            bail!("Mocks directory not found: {}", mocks_dir.display());
        }
        let bundle_path = resolve_path(&root_dir, &config.bundle);

        // Discovery and bundle loading are independent
        let (scan_result, bundle_result) = rayon::join(
            || scan_mock_files(&mocks_dir, &config.includes, &config.ignores, verbose),
            || load_bundle(&bundle_path, &config.bundle_name),
        );

        let bundle = bundle_result?;

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        if verbose {
            eprintln!(
                "Note: Loaded {} key(s) from {}, found {} mock file(s) in {}",
                bundle.len(),
                bundle_path.display(),
                scan_result.files.len(),
                mocks_dir.display()
            );
        }

        let ignore_list = config.ignore_keys.iter().cloned().collect();

        Ok(Self {
            config,
            root_dir,
            mocks_dir,
            files: scan_result.files,
            bundle,
            ignore_list,
            verbose,
            parsed: OnceLock::new(),
        })
    }

    /// Parsed documents for all mock files that could be read and parsed.
    ///
    /// Reading and parsing run in parallel. Failures are isolated per file and
    /// collected separately, see `parse_errors()`.
    pub fn documents(&self) -> &BTreeMap<String, MockDocument> {
        &self.parsed().documents
    }

    /// Mock files that could not be read or parsed.
    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.parsed().errors
    }

    fn parsed(&self) -> &ParsedMocks {
        self.parsed.get_or_init(|| {
            let parse_results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| (file_path.clone(), parse_mock_file(Path::new(file_path))))
                .collect();

            let mut documents = BTreeMap::new();
            let mut errors = Vec::new();

            for (file_path, result) in parse_results {
                match result {
                    Ok(document) => {
                        documents.insert(file_path, document);
                    }
                    Err(e) => {
                        if self.verbose {
                            eprintln!("{} {} - {:#}", "warning:".bold().yellow(), file_path, e);
                        }
                        errors.push(ParseErrorIssue {
                            file_path,
                            error: format!("{:#}", e),
                        });
                    }
                }
            }

            ParsedMocks { documents, errors }
        })
    }

    /// Short name of a mock file for messages.
    ///
    /// The text after `identifierAnchor` when the path contains it, otherwise
    /// the path relative to the mocks directory.
    pub fn file_identifier(&self, file_path: &str) -> String {
        file_identifier(
            file_path,
            &self.mocks_dir,
            self.config.identifier_anchor.as_deref(),
        )
    }
}

pub fn file_identifier(file_path: &str, mocks_dir: &Path, anchor: Option<&str>) -> String {
    let normalized = file_path.replace('\\', "/");

    if let Some(anchor) = anchor.filter(|a| !a.is_empty())
        && let Some(pos) = normalized.find(anchor)
    {
        return normalized[pos + anchor.len()..].to_string();
    }

    match Path::new(file_path).strip_prefix(mocks_dir) {
        Ok(relative) => relative.to_string_lossy().replace('\\', "/"),
        Err(_) => normalized,
    }
}

/// Resolve a configured path against the project root.
///
/// Relative paths stay relative when the root is the current directory, so
/// reported file paths match what the user typed.
pub fn resolve_path(root_dir: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        return p.to_path_buf();
    }

    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
