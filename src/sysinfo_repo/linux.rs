// Linux-specific helpers: /proc/cpuinfo, /etc/os-release.

/// Read first "model name" from /proc/cpuinfo (Linux). Prefer over sysinfo when it returns "cpu0" etc.
pub(super) fn read_cpu_model_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/cpuinfo").ok()?;
        parse_cpu_model(&content)
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// Read the distro name (NAME, then PRETTY_NAME) from /etc/os-release (Linux).
pub(super) fn read_distro_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/etc/os-release").ok()?;
        parse_os_release_field(&content, "NAME")
            .or_else(|| parse_os_release_field(&content, "PRETTY_NAME"))
    }
    #[cfg(not(target_os = "linux"))]
    None
}

pub(super) fn parse_cpu_model(cpuinfo: &str) -> Option<String> {
    cpuinfo
        .lines()
        .find(|line| line.starts_with("model name"))
        .and_then(|line| line.split_once(':'))
        .map(|(_, v)| v.trim())
        .filter(|s| !s.is_empty() && *s != "cpu0")
        .map(str::to_string)
}

pub(super) fn parse_os_release_field(content: &str, field: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let v = line.strip_prefix(field)?.strip_prefix('=')?.trim_matches('"');
        (!v.is_empty()).then(|| v.to_string())
    })
}

/// Maps a CPUID vendor string to the manufacturer name ("GenuineIntel" -> "Intel").
pub(super) fn manufacturer_from_vendor(vendor_id: &str) -> String {
    match vendor_id {
        "GenuineIntel" => "Intel".into(),
        "AuthenticAMD" => "AMD".into(),
        "CentaurHauls" => "VIA".into(),
        "" => "Unknown".into(),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_model_takes_first_model_name() {
        let info = "processor\t: 0\nmodel name\t: AMD Ryzen 7 5800X\nprocessor\t: 1\nmodel name\t: other\n";
        assert_eq!(parse_cpu_model(info).as_deref(), Some("AMD Ryzen 7 5800X"));
        assert_eq!(parse_cpu_model("model name\t: cpu0\n"), None);
        assert_eq!(parse_cpu_model(""), None);
    }

    #[test]
    fn os_release_field_strips_quotes_and_skips_prefix_matches() {
        let content = "PRETTY_NAME=\"Ubuntu 24.04 LTS\"\nNAME=\"Ubuntu\"\n";
        assert_eq!(
            parse_os_release_field(content, "NAME").as_deref(),
            Some("Ubuntu")
        );
        assert_eq!(
            parse_os_release_field(content, "PRETTY_NAME").as_deref(),
            Some("Ubuntu 24.04 LTS")
        );
        assert_eq!(parse_os_release_field("NAME=\"\"\n", "NAME"), None);
    }

    #[test]
    fn vendor_maps_to_manufacturer() {
        assert_eq!(manufacturer_from_vendor("GenuineIntel"), "Intel");
        assert_eq!(manufacturer_from_vendor("AuthenticAMD"), "AMD");
        assert_eq!(manufacturer_from_vendor("ARM"), "ARM");
        assert_eq!(manufacturer_from_vendor(""), "Unknown");
    }
}
