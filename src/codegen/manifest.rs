use crate::defaults::CodegenDefaults;

/// `Move.toml` for a package named after the (already sanitized) module.
pub fn emit_manifest(package_name: &str, defaults: &CodegenDefaults) -> String {
    format!(
        "[package]\n\
         name = \"{name}\"\n\
         version = \"{version}\"\n\
         \n\
         [dependencies]\n\
         Sui = {{ git = \"{git}\", subdir = \"{subdir}\", rev = \"{rev}\" }}\n\
         \n\
         [addresses]\n\
         {name} = \"{address}\"\n",
        name = package_name,
        version = defaults.package_version,
        git = defaults.framework_git,
        subdir = defaults.framework_subdir,
        rev = defaults.framework_rev,
        address = defaults.package_address,
    )
}
