use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("No module named '{module}' (searched: {})", display_dirs(.searched))]
    NotFound {
        module: String,
        searched: Vec<PathBuf>,
    },
}

fn display_dirs(dirs: &[PathBuf]) -> String {
    dirs.iter()
        .map(|dir| dir.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Finds Python modules by name, in the order of its search directories.
#[derive(Debug)]
pub struct ModuleLocator {
    search_dirs: Vec<PathBuf>,
}

impl ModuleLocator {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// Resolve `module` to a source file.
    ///
    /// An existing file path is taken as is. Otherwise the name is read as a
    /// dotted module path and looked up as `<name>.py` or
    /// `<name>/__init__.py` in each search directory.
    pub fn locate(&self, module: &str) -> Result<PathBuf, LocateError> {
        let as_path = Path::new(module);
        if as_path.is_file() {
            return Ok(as_path.to_path_buf());
        }

        let relative = module_name(module).replace('.', "/");
        let found = self.search_dirs.iter().find_map(|dir| {
            [
                dir.join(format!("{relative}.py")),
                dir.join(&relative).join("__init__.py"),
            ]
            .into_iter()
            .inspect(|candidate| log::debug!("Trying {}", candidate.display()))
            .find(|candidate| candidate.is_file())
        });

        found.ok_or_else(|| LocateError::NotFound {
            module: module.to_string(),
            searched: self.search_dirs.clone(),
        })
    }
}

/// Module name with a trailing `.py` removed.
pub fn module_name(module: &str) -> &str {
    module.strip_suffix(".py").unwrap_or(module)
}

/// Title used when none is given: the module name with underscores turned
/// into hyphens.
///
/// For a file path the file stem stands in for the module name, and a
/// package's `__init__.py` is named after its directory.
pub fn default_title(module: &str) -> String {
    let path = Path::new(module);
    let name = if path.is_file() {
        let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned());
        match stem.as_deref() {
            Some("__init__") => path
                .parent()
                .and_then(Path::file_name)
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            _ => stem.unwrap_or_default(),
        }
    } else {
        module_name(module).to_string()
    };
    name.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str) -> PathBuf {
        let path = dir.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "'''doc'''\n").unwrap();
        path
    }

    #[rstest]
    #[case("my_module", "my-module")]
    #[case("my_module.py", "my-module")]
    #[case("pkg.sub_mod", "pkg.sub-mod")]
    fn titles_from_module_names(#[case] module: &str, #[case] expected: &str) {
        assert_eq!(default_title(module), expected);
    }

    #[test]
    fn titles_from_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let file = write(temp_dir.path(), "src/tiny_tool.py");
        let init = write(temp_dir.path(), "my_pkg/__init__.py");

        assert_eq!(default_title(&file.to_string_lossy()), "tiny-tool");
        assert_eq!(default_title(&init.to_string_lossy()), "my-pkg");
    }

    #[test]
    fn locates_modules_and_packages_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let module = write(second.path(), "tool.py");
        let package = write(second.path(), "pkg/sub/__init__.py");
        let shadowing = write(first.path(), "pkg/sub.py");

        let locator = ModuleLocator::new(vec![first.path().into(), second.path().into()]);

        assert_eq!(locator.locate("tool").unwrap(), module);
        assert_eq!(locator.locate("tool.py").unwrap(), module);
        assert_eq!(locator.locate("pkg.sub").unwrap(), shadowing);

        let only_second = ModuleLocator::new(vec![second.path().into()]);
        assert_eq!(only_second.locate("pkg.sub").unwrap(), package);
    }

    #[test]
    fn existing_file_path_wins() {
        let temp_dir = TempDir::new().unwrap();
        let file = write(temp_dir.path(), "elsewhere/script.py");

        let locator = ModuleLocator::new(vec![]);

        assert_eq!(locator.locate(&file.to_string_lossy()).unwrap(), file);
    }

    #[test]
    fn missing_module_lists_search_dirs() {
        let locator = ModuleLocator::new(vec![PathBuf::from("/a"), PathBuf::from("/b")]);

        let err = locator.locate("nope").unwrap_err();

        assert_eq!(
            err.to_string(),
            "No module named 'nope' (searched: /a, /b)"
        );
    }
}
