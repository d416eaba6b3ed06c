/// Render `KEY=VALUE` pairs as an eval-able POSIX snippet, one `export` per
/// pair, mirroring what the native bridge pushes into the renderer process.
///
/// No pairs yields an empty string. Keys that are not valid shell
/// identifiers are skipped; the file may carry them, the shell cannot.
pub fn export_posix(pairs: &[(String, String)]) -> String {
    let mut out = String::new();

    for (key, value) in pairs {
        if !is_sh_identifier(key) {
            continue;
        }
        if out.is_empty() {
            header(&mut out, "mesaenv");
        }
        out.push_str("export ");
        out.push_str(key);
        out.push('=');
        out.push_str(&quote_posix(value));
        out.push('\n');
    }

    out
}

fn header(out: &mut String, title: &str) {
    out.push_str("# ");
    out.push_str(title);
    out.push('\n');
    out.push('\n');
}

// -------------------- quoting helpers --------------------

fn quote_posix(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' | '"' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

fn is_sh_identifier(s: &str) -> bool {
    let mut it = s.bytes();
    match it.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    it.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn exports_every_pair_in_order() {
        let out = export_posix(&[
            pair("GALLIUM_DRIVER", "zink"),
            pair("MESA_LIBRARY", "/data/libOSMesa.so"),
        ]);
        assert_eq!(
            out,
            "# mesaenv\n\n\
             export GALLIUM_DRIVER=\"zink\"\n\
             export MESA_LIBRARY=\"/data/libOSMesa.so\"\n"
        );
    }

    #[test]
    fn nothing_to_export_emits_nothing() {
        assert_eq!(export_posix(&[]), "");
    }

    #[test]
    fn values_are_double_quoted_with_escapes() {
        let out = export_posix(&[pair("K", r#"a"b\c"#)]);
        assert_eq!(out, "# mesaenv\n\nexport K=\"a\\\"b\\\\c\"\n");

        let out = export_posix(&[pair("MESA_LIBRARY", "/sdcard/My Files/libOSMesa.so")]);
        assert_eq!(
            out,
            "# mesaenv\n\nexport MESA_LIBRARY=\"/sdcard/My Files/libOSMesa.so\"\n"
        );
    }

    #[test]
    fn non_identifier_keys_are_skipped() {
        let out = export_posix(&[pair("bad key", "x"), pair("2COOL", "y")]);
        assert_eq!(out, "");
    }
}
