// Selected rows of
// https://github.com/latex3/unicode-math/blob/master/unicode-math-table.tex.
// Not exhaustive. Rows are sorted by code point.

use crate::math_type::MathType;

const ABC: MathType = MathType::Alphabetic;
const ACC: MathType = MathType::Accent;
const BIN: MathType = MathType::BinaryOperation;
const BOT: MathType = MathType::BottomAccent;
const CLO: MathType = MathType::Closing;
const FEN: MathType = MathType::Fencing;
const LAY: MathType = MathType::AccentOverlay;
const LOP: MathType = MathType::LargeOperator;
const NDR: MathType = MathType::Under;
const OPN: MathType = MathType::Opening;
const ORD: MathType = MathType::Ordinary;
const OVR: MathType = MathType::Over;
const PUN: MathType = MathType::Punctuation;
const RAD: MathType = MathType::Radical;
const REL: MathType = MathType::Relation;

pub const UNIMATH_RECORDS: &[(u32, MathType, &str)] = &[
    (0x0021, PUN, "mathexclam"),
    (0x0023, ORD, "mathoctothorpe"),
    (0x0024, ORD, "mathdollar"),
    (0x0025, ORD, "mathpercent"),
    (0x0026, ORD, "mathampersand"),
    (0x0028, OPN, "lparen"),
    (0x0029, CLO, "rparen"),
    (0x002B, BIN, "mathplus"),
    (0x002C, PUN, "mathcomma"),
    (0x002E, ORD, "mathperiod"),
    (0x002F, ORD, "mathslash"),
    (0x003A, PUN, "mathcolon"),
    (0x003B, PUN, "mathsemicolon"),
    (0x003C, REL, "less"),
    (0x003D, REL, "equal"),
    (0x003E, REL, "greater"),
    (0x003F, ORD, "mathquestion"),
    (0x0040, ORD, "mathatsign"),
    (0x005B, OPN, "lbrack"),
    (0x005C, ORD, "backslash"),
    (0x005D, CLO, "rbrack"),
    (0x007B, OPN, "lbrace"),
    (0x007C, FEN, "vert"),
    (0x007D, CLO, "rbrace"),
    (0x00A3, ORD, "mathsterling"),
    (0x00A5, ORD, "mathyen"),
    (0x00AC, ORD, "neg"),
    (0x00B1, BIN, "pm"),
    (0x00B7, BIN, "cdotp"),
    (0x00D7, BIN, "times"),
    (0x00F7, BIN, "div"),
    (0x0300, ACC, "grave"),
    (0x0301, ACC, "acute"),
    (0x0302, ACC, "hat"),
    (0x0303, ACC, "tilde"),
    (0x0304, ACC, "bar"),
    (0x0307, ACC, "dot"),
    (0x0308, ACC, "ddot"),
    (0x030C, ACC, "check"),
    (0x0330, BOT, "wideutilde"),
    (0x0331, BOT, "underbar"),
    (0x0338, LAY, "not"),
    (0x0391, ABC, "upAlpha"),
    (0x03B1, ABC, "mupalpha"),
    (0x03B2, ABC, "mupbeta"),
    (0x2016, FEN, "Vert"),
    (0x2020, BIN, "dagger"),
    (0x2021, BIN, "ddagger"),
    (0x2026, ORD, "unicodeellipsis"),
    (0x2032, ORD, "prime"),
    (0x2190, REL, "leftarrow"),
    (0x2191, REL, "uparrow"),
    (0x2192, REL, "rightarrow"),
    (0x2193, REL, "downarrow"),
    (0x2194, REL, "leftrightarrow"),
    (0x2200, ORD, "forall"),
    (0x2202, ORD, "partial"),
    (0x2203, ORD, "exists"),
    (0x2205, ORD, "varnothing"),
    (0x2207, ORD, "nabla"),
    (0x2208, REL, "in"),
    (0x2209, REL, "notin"),
    (0x220B, REL, "ni"),
    (0x220F, LOP, "prod"),
    (0x2210, LOP, "coprod"),
    (0x2211, LOP, "sum"),
    (0x2212, BIN, "minus"),
    (0x2213, BIN, "mp"),
    (0x2218, BIN, "vysmwhtcircle"),
    (0x221A, RAD, "sqrt"),
    (0x221E, ORD, "infty"),
    (0x2227, BIN, "wedge"),
    (0x2228, BIN, "vee"),
    (0x2229, BIN, "cap"),
    (0x222A, BIN, "cup"),
    (0x222B, LOP, "int"),
    (0x222E, LOP, "oint"),
    (0x2248, REL, "approx"),
    (0x2260, REL, "ne"),
    (0x2261, REL, "equiv"),
    (0x2264, REL, "leq"),
    (0x2265, REL, "geq"),
    (0x2282, REL, "subset"),
    (0x2283, REL, "supset"),
    (0x2286, REL, "subseteq"),
    (0x2287, REL, "supseteq"),
    (0x2295, BIN, "oplus"),
    (0x2297, BIN, "otimes"),
    (0x22C5, BIN, "cdot"),
    (0x2308, OPN, "lceil"),
    (0x2309, CLO, "rceil"),
    (0x230A, OPN, "lfloor"),
    (0x230B, CLO, "rfloor"),
    (0x23B4, OVR, "overbracket"),
    (0x23B5, NDR, "underbracket"),
    (0x23DC, OVR, "overparen"),
    (0x23DD, NDR, "underparen"),
    (0x23DE, OVR, "overbrace"),
    (0x23DF, NDR, "underbrace"),
    (0x27E8, OPN, "langle"),
    (0x27E9, CLO, "rangle"),
    (0x1D400, ABC, "mbfA"),
    (0x1D41A, ABC, "mbfa"),
    (0x1D434, ABC, "mitA"),
    (0x1D44E, ABC, "mita"),
];
