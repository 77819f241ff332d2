//! HTML entity escaping (HTML4 named entities for Latin-1 plus the markup
//! specials) and unescaping (named + numeric references).

const ENTITIES: &[(char, &str)] = &[
    ('&', "amp"),
    ('<', "lt"),
    ('>', "gt"),
    ('"', "quot"),
    ('\u{a0}', "nbsp"),
    ('¡', "iexcl"),
    ('¢', "cent"),
    ('£', "pound"),
    ('¤', "curren"),
    ('¥', "yen"),
    ('¦', "brvbar"),
    ('§', "sect"),
    ('¨', "uml"),
    ('©', "copy"),
    ('ª', "ordf"),
    ('«', "laquo"),
    ('¬', "not"),
    ('®', "reg"),
    ('¯', "macr"),
    ('°', "deg"),
    ('±', "plusmn"),
    ('²', "sup2"),
    ('³', "sup3"),
    ('´', "acute"),
    ('µ', "micro"),
    ('¶', "para"),
    ('·', "middot"),
    ('¸', "cedil"),
    ('¹', "sup1"),
    ('º', "ordm"),
    ('»', "raquo"),
    ('¼', "frac14"),
    ('½', "frac12"),
    ('¾', "frac34"),
    ('¿', "iquest"),
    ('À', "Agrave"),
    ('Á', "Aacute"),
    ('Â', "Acirc"),
    ('Ã', "Atilde"),
    ('Ä', "Auml"),
    ('Å', "Aring"),
    ('Æ', "AElig"),
    ('Ç', "Ccedil"),
    ('È', "Egrave"),
    ('É', "Eacute"),
    ('Ê', "Ecirc"),
    ('Ë', "Euml"),
    ('Ì', "Igrave"),
    ('Í', "Iacute"),
    ('Î', "Icirc"),
    ('Ï', "Iuml"),
    ('Ð', "ETH"),
    ('Ñ', "Ntilde"),
    ('Ò', "Ograve"),
    ('Ó', "Oacute"),
    ('Ô', "Ocirc"),
    ('Õ', "Otilde"),
    ('Ö', "Ouml"),
    ('×', "times"),
    ('Ø', "Oslash"),
    ('Ù', "Ugrave"),
    ('Ú', "Uacute"),
    ('Û', "Ucirc"),
    ('Ü', "Uuml"),
    ('Ý', "Yacute"),
    ('Þ', "THORN"),
    ('ß', "szlig"),
    ('à', "agrave"),
    ('á', "aacute"),
    ('â', "acirc"),
    ('ã', "atilde"),
    ('ä', "auml"),
    ('å', "aring"),
    ('æ', "aelig"),
    ('ç', "ccedil"),
    ('è', "egrave"),
    ('é', "eacute"),
    ('ê', "ecirc"),
    ('ë', "euml"),
    ('ì', "igrave"),
    ('í', "iacute"),
    ('î', "icirc"),
    ('ï', "iuml"),
    ('ð', "eth"),
    ('ñ', "ntilde"),
    ('ò', "ograve"),
    ('ó', "oacute"),
    ('ô', "ocirc"),
    ('õ', "otilde"),
    ('ö', "ouml"),
    ('÷', "divide"),
    ('ø', "oslash"),
    ('ù', "ugrave"),
    ('ú', "uacute"),
    ('û', "ucirc"),
    ('ü', "uuml"),
    ('ý', "yacute"),
    ('þ', "thorn"),
    ('ÿ', "yuml"),
    ('€', "euro"),
];

/// Replace every char with a named entity by `&name;`.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match ENTITIES.iter().find(|(ch, _)| *ch == c) {
            Some((_, name)) => {
                out.push('&');
                out.push_str(name);
                out.push(';');
            }
            None => out.push(c),
        }
    }
    out
}

/// Resolve named and numeric (`&#228;`, `&#xE4;`) references. Unknown or
/// malformed references are kept verbatim.
pub fn unescape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&semi| semi > 1 && semi <= 10)
            .and_then(|semi| decode_reference(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_reference(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    if name == "apos" {
        return Some('\'');
    }
    ENTITIES.iter().find(|(_, n)| *n == name).map(|(c, _)| *c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_latin1_and_markup() {
        assert_eq!(escape_html("Müller & <Söhne>"), "M&uuml;ller &amp; &lt;S&ouml;hne&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn unescape_named_numeric_and_garbage() {
        assert_eq!(unescape_html("M&uuml;ller &amp; co"), "Müller & co");
        assert_eq!(unescape_html("&#228;&#xE4;"), "ää");
        assert_eq!(unescape_html("a & b &bogus; &"), "a & b &bogus; &");
    }
}
