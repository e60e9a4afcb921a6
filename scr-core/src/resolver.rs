//! Configuration path resolution.
//!
//! Configuration files refer to locations inside the release tree with a
//! leading placeholder, e.g. `{{etc}}/app.conf` or `{{ Log }}/archive`, or to
//! the user's home with a leading `~`. Resolution substitutes the prefix and
//! always returns an absolute, normalized path. Only a prefix is substituted;
//! there is no nesting and no substitution further into the string.

use log::debug;

use crate::bootstrap::BaseDirectories;
use crate::error::{ErrorMode, ScrError, ScrResult};
use crate::paths::{self, PATH_SEPARATORS};

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const OPEN_MARKER: &str = "{{";
const CLOSE_MARKER: &str = "}}";

/// The fixed set of placeholder names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigPathToken {
    Bin,
    Etc,
    Lib,
    Log,
    Prog,
    Rel,
    Schema,
}

impl ConfigPathToken {
    pub const ALL: [ConfigPathToken; 7] = [
        ConfigPathToken::Bin,
        ConfigPathToken::Etc,
        ConfigPathToken::Lib,
        ConfigPathToken::Log,
        ConfigPathToken::Prog,
        ConfigPathToken::Rel,
        ConfigPathToken::Schema,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigPathToken::Bin => "bin",
            ConfigPathToken::Etc => "etc",
            ConfigPathToken::Lib => "lib",
            ConfigPathToken::Log => "log",
            ConfigPathToken::Prog => "prog",
            ConfigPathToken::Rel => "rel",
            ConfigPathToken::Schema => "schema",
        }
    }

    /// The value this token stands for. `prog` is the program's base name,
    /// every other token a directory.
    pub fn value(self, dirs: &BaseDirectories) -> PathBuf {
        match self {
            ConfigPathToken::Bin => dirs.bin_dir().to_path_buf(),
            ConfigPathToken::Etc => dirs.etc_dir().to_path_buf(),
            ConfigPathToken::Lib => dirs.lib_dir().to_path_buf(),
            ConfigPathToken::Log => dirs.log_dir().to_path_buf(),
            ConfigPathToken::Prog => PathBuf::from(dirs.prog_name()),
            ConfigPathToken::Rel => dirs.rel_dir().to_path_buf(),
            ConfigPathToken::Schema => dirs.schema_dir().to_path_buf(),
        }
    }
}

impl FromStr for ConfigPathToken {
    type Err = ScrError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        ConfigPathToken::ALL
            .into_iter()
            .find(|token| token.as_str() == key)
            .ok_or(ScrError::Lookup { table: "placeholder", key })
    }
}

impl fmt::Display for ConfigPathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{OPEN_MARKER}{}{CLOSE_MARKER}", self.as_str())
    }
}

/// Returns an absolute path with a leading `~` or `{{token}}` resolved.
///
/// The lookup table is read from `dirs` on every call, so a log directory
/// changed by log initialization is picked up.
///
/// # Errors
///
/// * `ScrError::Lookup` - the placeholder names no known token
/// * a parameter value error - the `{{` has no matching `}}`
/// * `ScrError::Io` - the current directory cannot be determined
pub fn resolve_conf_path(dirs: &BaseDirectories, mode: ErrorMode, path: &str) -> ScrResult<PathBuf> {
    let expanded = if path.starts_with('~') {
        paths::expand_user(path)
    } else if let Some(rest) = path.strip_prefix(OPEN_MARKER) {
        substitute(dirs, mode, path, rest)?
    } else {
        PathBuf::from(path)
    };

    let resolved = paths::make_absolute(&expanded)?;
    debug!("Resolved config path '{}' to {}", path, resolved.display());
    Ok(resolved)
}

fn substitute(dirs: &BaseDirectories, mode: ErrorMode, path: &str, rest: &str) -> ScrResult<PathBuf> {
    let end = rest
        .find(CLOSE_MARKER)
        .ok_or_else(|| mode.value_error(format!("unterminated placeholder: '{path}'")))?;
    let token: ConfigPathToken = rest[..end].parse()?;
    let base = token.value(dirs);
    let tail = &rest[end + CLOSE_MARKER.len()..];

    Ok(join_tail(&base, tail))
}

fn join_tail(base: &Path, tail: &str) -> PathBuf {
    if tail.starts_with(PATH_SEPARATORS) {
        let mut joined = base.as_os_str().to_os_string();
        joined.push(tail);
        PathBuf::from(joined)
    } else if tail.is_empty() {
        base.to_path_buf()
    } else {
        base.join(tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirs() -> BaseDirectories {
        BaseDirectories::for_program(Path::new("/opt/rel/bin/tool"), Path::new("/"))
    }

    #[test]
    fn token_parse_is_case_and_space_insensitive() {
        assert_eq!(" LoG ".parse::<ConfigPathToken>().unwrap(), ConfigPathToken::Log);
        assert_eq!("schema".parse::<ConfigPathToken>().unwrap(), ConfigPathToken::Schema);
    }

    #[test]
    fn unknown_token_is_lookup_failure() {
        let err = "bogus".parse::<ConfigPathToken>().unwrap_err();
        assert!(matches!(err, ScrError::Lookup { ref key, .. } if key == "bogus"));
    }

    #[test]
    fn every_directory_token_resolves() {
        let dirs = dirs();
        for (token, expected) in [
            ("bin", "/opt/rel/bin"),
            ("etc", "/opt/rel/etc"),
            ("lib", "/opt/rel/lib"),
            ("log", "/opt/rel/log"),
            ("rel", "/opt/rel"),
            ("schema", "/opt/rel/schema"),
        ] {
            let path = format!("{{{{{token}}}}}/x");
            let resolved = resolve_conf_path(&dirs, ErrorMode::Plain, &path).unwrap();
            assert_eq!(resolved, Path::new(expected).join("x"), "token {token}");
        }
    }

    #[test]
    fn tail_without_separator_is_joined() {
        let resolved = resolve_conf_path(&dirs(), ErrorMode::Plain, "{{etc}}app.conf").unwrap();
        assert_eq!(resolved, PathBuf::from("/opt/rel/etc/app.conf"));
    }

    #[test]
    fn tail_is_normalized() {
        let resolved = resolve_conf_path(&dirs(), ErrorMode::Plain, "{{log}}/../etc/./x").unwrap();
        assert_eq!(resolved, PathBuf::from("/opt/rel/etc/x"));
    }

    #[test]
    fn empty_tail_resolves_to_base() {
        let resolved = resolve_conf_path(&dirs(), ErrorMode::Plain, "{{ rel }}").unwrap();
        assert_eq!(resolved, PathBuf::from("/opt/rel"));
    }

    #[test]
    fn absolute_path_passes_through() {
        let resolved = resolve_conf_path(&dirs(), ErrorMode::Plain, "/var//tmp/./x").unwrap();
        assert_eq!(resolved, PathBuf::from("/var/tmp/x"));
    }

    #[test]
    fn unterminated_placeholder_is_value_error() {
        let err = resolve_conf_path(&dirs(), ErrorMode::Debug, "{{log/x").unwrap_err();
        assert!(matches!(err, ScrError::ParamValue(_)));
    }

    #[test]
    fn token_display_uses_markers() {
        assert_eq!(ConfigPathToken::Etc.to_string(), "{{etc}}");
    }
}
