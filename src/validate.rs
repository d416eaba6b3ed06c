//! Validation policy for the joint GL/GLSL version update.
//!
//! Raw `set` writes stay free-form; only the version update rejects input.
//! A field passes when it parses as a float inside the inclusive range AND
//! matches the literal character pattern, exactly the pair of checks the
//! plugin's settings screen applied before touching the file.

use regex::Regex;

/// GL override: single digit after the point, 2.8 through 4.6.
pub const GL_RANGE: (f32, f32) = (2.8, 4.6);

/// GLSL override: three digits ending in 0, 280 through 460.
pub const GLSL_RANGE: (f32, f32) = (280.0, 460.0);

/// Per-field outcome of the joint check. The update is all-or-nothing: write
/// only when [`VersionCheck::accepted`] holds, and report each failed field
/// on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionCheck {
    pub gl_ok: bool,
    pub glsl_ok: bool,
}

impl VersionCheck {
    pub fn accepted(self) -> bool {
        self.gl_ok && self.glsl_ok
    }
}

pub fn check_versions(gl: &str, glsl: &str) -> VersionCheck {
    let gl_pattern = Regex::new(r"^[234]\.\d$").unwrap();
    let glsl_pattern = Regex::new(r"^[234]\d0$").unwrap();

    VersionCheck {
        gl_ok: in_range(gl, GL_RANGE) && gl_pattern.is_match(gl),
        glsl_ok: in_range(glsl, GLSL_RANGE) && glsl_pattern.is_match(glsl),
    }
}

fn in_range(version: &str, (min, max): (f32, f32)) -> bool {
    version
        .parse::<f32>()
        .is_ok_and(|v| (min..=max).contains(&v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(gl: &str, glsl: &str) -> (bool, bool) {
        let c = check_versions(gl, glsl);
        (c.gl_ok, c.glsl_ok)
    }

    #[test]
    fn accepts_defaults_and_bounds() {
        assert!(check_versions("4.6", "460").accepted());
        assert!(check_versions("2.8", "280").accepted());
        assert!(check_versions("3.3", "330").accepted());
    }

    #[test]
    fn flags_each_field_on_its_own() {
        assert_eq!(check("5.0", "460"), (false, true));
        assert_eq!(check("4.6", "999"), (true, false));
        assert_eq!(check("5.0", "999"), (false, false));
    }

    #[test]
    fn range_and_pattern_must_both_hold() {
        // pattern ok, range fail
        assert!(!check_versions("2.1", "460").gl_ok);
        assert!(!check_versions("4.6", "250").glsl_ok);
        // range ok, pattern fail
        assert!(!check_versions("4.60", "460").gl_ok);
        assert!(!check_versions("4.6", "455").glsl_ok);
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(check("abc", ""), (false, false));
        assert!(!check_versions("4.", "460").gl_ok);
        assert!(!check_versions("4.6", "46O").glsl_ok);
    }
}
