// LaTeX2e text-mode accent and symbol commands, selected from
// https://mirrors.ctan.org/macros/latex/base/encguide.pdf. Not exhaustive.

// (grapheme, notations)
pub const LATEX_TEXT_NOTATIONS: &[(&str, &[&str])] = &[
    ("\u{00A7}", &["\\S", "\\textsection"]),
    ("\u{00A9}", &["\\copyright", "\\textcopyright"]),
    ("\u{00A3}", &["\\pounds", "\\textsterling"]),
    ("\u{00B6}", &["\\P", "\\textparagraph"]),
    ("\u{00C5}", &["\\AA", "\\AA{}"]),
    ("\u{00C6}", &["\\AE", "\\AE{}"]),
    ("\u{00D8}", &["\\O", "\\O{}"]),
    ("\u{00DF}", &["\\ss", "\\ss{}"]),
    ("\u{00E0}", &["\\`a", "\\`{a}"]),
    ("\u{00E1}", &["\\'a", "\\'{a}"]),
    ("\u{00E2}", &["\\^a", "\\^{a}"]),
    ("\u{00E4}", &["\\\"a", "\\\"{a}"]),
    ("\u{00E5}", &["\\aa", "\\aa{}"]),
    ("\u{00E6}", &["\\ae", "\\ae{}"]),
    ("\u{00E7}", &["\\c{c}", "\\c c"]),
    ("\u{00E8}", &["\\`e", "\\`{e}"]),
    ("\u{00E9}", &["\\'e", "\\'{e}"]),
    ("\u{00F1}", &["\\~n", "\\~{n}"]),
    ("\u{00F6}", &["\\\"o", "\\\"{o}"]),
    ("\u{00F8}", &["\\o", "\\o{}"]),
    ("\u{00FC}", &["\\\"u", "\\\"{u}"]),
    ("\u{0131}", &["\\i", "\\i{}"]),
    ("\u{0237}", &["\\j", "\\j{}"]),
    ("\u{0142}", &["\\l", "\\l{}"]),
    ("\u{0153}", &["\\oe", "\\oe{}"]),
    ("n\u{0304}", &["\\=n", "\\={n}"]),
    ("t\u{0361}s", &["\\t{ts}"]),
    ("\u{2013}", &["--", "\\textendash"]),
    ("\u{2014}", &["---", "\\textemdash"]),
    ("\u{2018}", &["`", "\\textquoteleft"]),
    ("\u{2019}", &["'", "\\textquoteright"]),
    ("\u{201C}", &["``", "\\textquotedblleft"]),
    ("\u{201D}", &["''", "\\textquotedblright"]),
    ("\u{2020}", &["\\dag", "\\textdagger"]),
    ("\u{2021}", &["\\ddag", "\\textdaggerdbl"]),
    ("\u{2026}", &["\\ldots", "\\textellipsis"]),
    ("\u{20AC}", &["\\texteuro"]),
];
