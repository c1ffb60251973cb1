// Selected symbols of the Typst `sym` module (https://github.com/typst/codex).
// Not exhaustive.

// (grapheme, notations)
pub const TYPST_NOTATIONS: &[(&str, &[&str])] = &[
    ("+", &["plus"]),
    ("=", &["eq"]),
    ("<", &["lt"]),
    (">", &["gt"]),
    ("\u{00B1}", &["plus.minus"]),
    ("\u{00D7}", &["times"]),
    ("\u{00F7}", &["div"]),
    ("\u{0391}", &["Alpha"]),
    ("\u{03B1}", &["alpha"]),
    ("\u{03B2}", &["beta"]),
    ("\u{03C0}", &["pi"]),
    ("\u{2020}", &["dagger"]),
    ("\u{2026}", &["dots.h"]),
    ("\u{2032}", &["prime"]),
    ("\u{2190}", &["arrow.l", "<-"]),
    ("\u{2191}", &["arrow.t"]),
    ("\u{2192}", &["arrow.r", "->"]),
    ("\u{2193}", &["arrow.b"]),
    ("\u{2194}", &["arrow.l.r", "<->"]),
    ("\u{21D2}", &["arrow.r.double", "=>"]),
    ("\u{2200}", &["forall"]),
    ("\u{2202}", &["partial"]),
    ("\u{2203}", &["exists"]),
    ("\u{2205}", &["emptyset", "nothing"]),
    ("\u{2207}", &["nabla"]),
    ("\u{2208}", &["in"]),
    ("\u{2209}", &["in.not"]),
    ("\u{220F}", &["product"]),
    ("\u{2211}", &["sum"]),
    ("\u{2212}", &["minus"]),
    ("\u{221E}", &["infinity", "oo"]),
    ("\u{2229}", &["sect"]),
    ("\u{222A}", &["union"]),
    ("\u{222B}", &["integral"]),
    ("\u{2248}", &["approx"]),
    ("\u{2260}", &["eq.not", "!="]),
    ("\u{2264}", &["lt.eq", "<="]),
    ("\u{2265}", &["gt.eq", ">="]),
    ("\u{2282}", &["subset"]),
    ("\u{2286}", &["subset.eq"]),
    ("\u{2295}", &["plus.circle"]),
    ("\u{22C5}", &["dot.op"]),
    ("\u{27E8}", &["angle.l"]),
    ("\u{27E9}", &["angle.r"]),
    ("\u{27F6}", &["arrow.r.long"]),
    ("=\u{20D2}", &["eq.vert.not"]),
];
