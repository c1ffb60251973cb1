// Generated from:
// - https://www.unicode.org/Public/14.0.0/ucd/Scripts.txt
// - https://www.unicode.org/Public/14.0.0/ucd/PropertyValueAliases.txt
// Do not edit by hand.

use crate::interval::IntervalRecord;
use crate::script::Script;

type R = IntervalRecord<&'static str>;

pub const SCRIPTS: &[Script] = &[
    Script::new("adlm", "Adlam", &[]),
    Script::new("aghb", "Caucasian_Albanian", &[]),
    Script::new("ahom", "Ahom", &[]),
    Script::new("arab", "Arabic", &[]),
    Script::new("armi", "Imperial_Aramaic", &[]),
    Script::new("armn", "Armenian", &[]),
    Script::new("avst", "Avestan", &[]),
    Script::new("bali", "Balinese", &[]),
    Script::new("bamu", "Bamum", &[]),
    Script::new("bass", "Bassa_Vah", &[]),
    Script::new("batk", "Batak", &[]),
    Script::new("beng", "Bengali", &[]),
    Script::new("bhks", "Bhaiksuki", &[]),
    Script::new("bopo", "Bopomofo", &[]),
    Script::new("brah", "Brahmi", &[]),
    Script::new("brai", "Braille", &[]),
    Script::new("bugi", "Buginese", &[]),
    Script::new("buhd", "Buhid", &[]),
    Script::new("cakm", "Chakma", &[]),
    Script::new("cans", "Canadian_Aboriginal", &[]),
    Script::new("cari", "Carian", &[]),
    Script::new("cham", "Cham", &[]),
    Script::new("cher", "Cherokee", &[]),
    Script::new("chrs", "Chorasmian", &[]),
    Script::new("copt", "Coptic", &["Qaac"]),
    Script::new("cpmn", "Cypro_Minoan", &[]),
    Script::new("cprt", "Cypriot", &[]),
    Script::new("cyrl", "Cyrillic", &[]),
    Script::new("deva", "Devanagari", &[]),
    Script::new("diak", "Dives_Akuru", &[]),
    Script::new("dogr", "Dogra", &[]),
    Script::new("dsrt", "Deseret", &[]),
    Script::new("dupl", "Duployan", &[]),
    Script::new("egyp", "Egyptian_Hieroglyphs", &[]),
    Script::new("elba", "Elbasan", &[]),
    Script::new("elym", "Elymaic", &[]),
    Script::new("ethi", "Ethiopic", &[]),
    Script::new("geor", "Georgian", &[]),
    Script::new("glag", "Glagolitic", &[]),
    Script::new("gong", "Gunjala_Gondi", &[]),
    Script::new("gonm", "Masaram_Gondi", &[]),
    Script::new("goth", "Gothic", &[]),
    Script::new("gran", "Grantha", &[]),
    Script::new("grek", "Greek", &[]),
    Script::new("gujr", "Gujarati", &[]),
    Script::new("guru", "Gurmukhi", &[]),
    Script::new("hang", "Hangul", &[]),
    Script::new("hani", "Han", &[]),
    Script::new("hano", "Hanunoo", &[]),
    Script::new("hatr", "Hatran", &[]),
    Script::new("hebr", "Hebrew", &[]),
    Script::new("hira", "Hiragana", &[]),
    Script::new("hluw", "Anatolian_Hieroglyphs", &[]),
    Script::new("hmng", "Pahawh_Hmong", &[]),
    Script::new("hmnp", "Nyiakeng_Puachue_Hmong", &[]),
    Script::new("hrkt", "Katakana_Or_Hiragana", &[]),
    Script::new("hung", "Old_Hungarian", &[]),
    Script::new("ital", "Old_Italic", &[]),
    Script::new("java", "Javanese", &[]),
    Script::new("kali", "Kayah_Li", &[]),
    Script::new("kana", "Katakana", &[]),
    Script::new("khar", "Kharoshthi", &[]),
    Script::new("khmr", "Khmer", &[]),
    Script::new("khoj", "Khojki", &[]),
    Script::new("kits", "Khitan_Small_Script", &[]),
    Script::new("knda", "Kannada", &[]),
    Script::new("kthi", "Kaithi", &[]),
    Script::new("lana", "Tai_Tham", &[]),
    Script::new("laoo", "Lao", &[]),
    Script::new("latn", "Latin", &[]),
    Script::new("lepc", "Lepcha", &[]),
    Script::new("limb", "Limbu", &[]),
    Script::new("lina", "Linear_A", &[]),
    Script::new("linb", "Linear_B", &[]),
    Script::new("lisu", "Lisu", &[]),
    Script::new("lyci", "Lycian", &[]),
    Script::new("lydi", "Lydian", &[]),
    Script::new("mahj", "Mahajani", &[]),
    Script::new("maka", "Makasar", &[]),
    Script::new("mand", "Mandaic", &[]),
    Script::new("mani", "Manichaean", &[]),
    Script::new("marc", "Marchen", &[]),
    Script::new("medf", "Medefaidrin", &[]),
    Script::new("mend", "Mende_Kikakui", &[]),
    Script::new("merc", "Meroitic_Cursive", &[]),
    Script::new("mero", "Meroitic_Hieroglyphs", &[]),
    Script::new("mlym", "Malayalam", &[]),
    Script::new("modi", "Modi", &[]),
    Script::new("mong", "Mongolian", &[]),
    Script::new("mroo", "Mro", &[]),
    Script::new("mtei", "Meetei_Mayek", &[]),
    Script::new("mult", "Multani", &[]),
    Script::new("mymr", "Myanmar", &[]),
    Script::new("nand", "Nandinagari", &[]),
    Script::new("narb", "Old_North_Arabian", &[]),
    Script::new("nbat", "Nabataean", &[]),
    Script::new("newa", "Newa", &[]),
    Script::new("nkoo", "Nko", &[]),
    Script::new("nshu", "Nushu", &[]),
    Script::new("ogam", "Ogham", &[]),
    Script::new("olck", "Ol_Chiki", &[]),
    Script::new("orkh", "Old_Turkic", &[]),
    Script::new("orya", "Oriya", &[]),
    Script::new("osge", "Osage", &[]),
    Script::new("osma", "Osmanya", &[]),
    Script::new("ougr", "Old_Uyghur", &[]),
    Script::new("palm", "Palmyrene", &[]),
    Script::new("pauc", "Pau_Cin_Hau", &[]),
    Script::new("perm", "Old_Permic", &[]),
    Script::new("phag", "Phags_Pa", &[]),
    Script::new("phli", "Inscriptional_Pahlavi", &[]),
    Script::new("phlp", "Psalter_Pahlavi", &[]),
    Script::new("phnx", "Phoenician", &[]),
    Script::new("plrd", "Miao", &[]),
    Script::new("prti", "Inscriptional_Parthian", &[]),
    Script::new("rjng", "Rejang", &[]),
    Script::new("rohg", "Hanifi_Rohingya", &[]),
    Script::new("runr", "Runic", &[]),
    Script::new("samr", "Samaritan", &[]),
    Script::new("sarb", "Old_South_Arabian", &[]),
    Script::new("saur", "Saurashtra", &[]),
    Script::new("sgnw", "SignWriting", &[]),
    Script::new("shaw", "Shavian", &[]),
    Script::new("shrd", "Sharada", &[]),
    Script::new("sidd", "Siddham", &[]),
    Script::new("sind", "Khudawadi", &[]),
    Script::new("sinh", "Sinhala", &[]),
    Script::new("sogd", "Sogdian", &[]),
    Script::new("sogo", "Old_Sogdian", &[]),
    Script::new("sora", "Sora_Sompeng", &[]),
    Script::new("soyo", "Soyombo", &[]),
    Script::new("sund", "Sundanese", &[]),
    Script::new("sylo", "Syloti_Nagri", &[]),
    Script::new("syrc", "Syriac", &[]),
    Script::new("tagb", "Tagbanwa", &[]),
    Script::new("takr", "Takri", &[]),
    Script::new("tale", "Tai_Le", &[]),
    Script::new("talu", "New_Tai_Lue", &[]),
    Script::new("taml", "Tamil", &[]),
    Script::new("tang", "Tangut", &[]),
    Script::new("tavt", "Tai_Viet", &[]),
    Script::new("telu", "Telugu", &[]),
    Script::new("tfng", "Tifinagh", &[]),
    Script::new("tglg", "Tagalog", &[]),
    Script::new("thaa", "Thaana", &[]),
    Script::new("thai", "Thai", &[]),
    Script::new("tibt", "Tibetan", &[]),
    Script::new("tirh", "Tirhuta", &[]),
    Script::new("tnsa", "Tangsa", &[]),
    Script::new("toto", "Toto", &[]),
    Script::new("ugar", "Ugaritic", &[]),
    Script::new("vaii", "Vai", &[]),
    Script::new("vith", "Vithkuqi", &[]),
    Script::new("wara", "Warang_Citi", &[]),
    Script::new("wcho", "Wancho", &[]),
    Script::new("xpeo", "Old_Persian", &[]),
    Script::new("xsux", "Cuneiform", &[]),
    Script::new("yezi", "Yezidi", &[]),
    Script::new("yiii", "Yi", &[]),
    Script::new("zanb", "Zanabazar_Square", &[]),
    Script::new("zinh", "Inherited", &["Qaai"]),
    Script::new("zyyy", "Common", &[]),
    Script::new("zzzz", "Unknown", &[]),
];

pub const SCRIPT_RANGES: &[R] = &[
    R::single(0x0000, 0x0040, "zyyy"),
    R::single(0x0041, 0x005A, "latn"),
    R::single(0x005B, 0x0060, "zyyy"),
    R::single(0x0061, 0x007A, "latn"),
    R::single(0x007B, 0x00A9, "zyyy"),
    R::single(0x00AA, 0x00AA, "latn"),
    R::single(0x00AB, 0x00B9, "zyyy"),
    R::single(0x00BA, 0x00BA, "latn"),
    R::single(0x00BB, 0x00BF, "zyyy"),
    R::single(0x00C0, 0x00D6, "latn"),
    R::single(0x00D7, 0x00D7, "zyyy"),
    R::single(0x00D8, 0x00F6, "latn"),
    R::single(0x00F7, 0x00F7, "zyyy"),
    R::single(0x00F8, 0x02B8, "latn"),
    R::single(0x02B9, 0x02DF, "zyyy"),
    R::single(0x02E0, 0x02E4, "latn"),
    R::single(0x02E5, 0x02E9, "zyyy"),
    R::single(0x02EA, 0x02EB, "bopo"),
    R::single(0x02EC, 0x02FF, "zyyy"),
    R::single(0x0300, 0x036F, "zinh"),
    R::single(0x0370, 0x0373, "grek"),
    R::single(0x0374, 0x0374, "zyyy"),
    R::single(0x0375, 0x0377, "grek"),
    R::single(0x037A, 0x037D, "grek"),
    R::single(0x037E, 0x037E, "zyyy"),
    R::single(0x037F, 0x037F, "grek"),
    R::single(0x0384, 0x0384, "grek"),
    R::single(0x0385, 0x0385, "zyyy"),
    R::single(0x0386, 0x0386, "grek"),
    R::single(0x0387, 0x0387, "zyyy"),
    R::single(0x0388, 0x038A, "grek"),
    R::single(0x038C, 0x038C, "grek"),
    R::single(0x038E, 0x03A1, "grek"),
    R::single(0x03A3, 0x03E1, "grek"),
    R::single(0x03E2, 0x03EF, "copt"),
    R::single(0x03F0, 0x03FF, "grek"),
    R::single(0x0400, 0x0484, "cyrl"),
    R::single(0x0485, 0x0486, "zinh"),
    R::single(0x0487, 0x052F, "cyrl"),
    R::single(0x0531, 0x0556, "armn"),
    R::single(0x0559, 0x058A, "armn"),
    R::single(0x058D, 0x058F, "armn"),
    R::single(0x0591, 0x05C7, "hebr"),
    R::single(0x05D0, 0x05EA, "hebr"),
    R::single(0x05EF, 0x05F4, "hebr"),
    R::single(0x0600, 0x0604, "arab"),
    R::single(0x0605, 0x0605, "zyyy"),
    R::single(0x0606, 0x060B, "arab"),
    R::single(0x060C, 0x060C, "zyyy"),
    R::single(0x060D, 0x061A, "arab"),
    R::single(0x061B, 0x061B, "zyyy"),
    R::single(0x061C, 0x061E, "arab"),
    R::single(0x061F, 0x061F, "zyyy"),
    R::single(0x0620, 0x063F, "arab"),
    R::single(0x0640, 0x0640, "zyyy"),
    R::single(0x0641, 0x064A, "arab"),
    R::single(0x064B, 0x0655, "zinh"),
    R::single(0x0656, 0x066F, "arab"),
    R::single(0x0670, 0x0670, "zinh"),
    R::single(0x0671, 0x06DC, "arab"),
    R::single(0x06DD, 0x06DD, "zyyy"),
    R::single(0x06DE, 0x06FF, "arab"),
    R::single(0x0700, 0x070D, "syrc"),
    R::single(0x070F, 0x074A, "syrc"),
    R::single(0x074D, 0x074F, "syrc"),
    R::single(0x0750, 0x077F, "arab"),
    R::single(0x0780, 0x07B1, "thaa"),
    R::single(0x07C0, 0x07FA, "nkoo"),
    R::single(0x07FD, 0x07FF, "nkoo"),
    R::single(0x0800, 0x082D, "samr"),
    R::single(0x0830, 0x083E, "samr"),
    R::single(0x0840, 0x085B, "mand"),
    R::single(0x085E, 0x085E, "mand"),
    R::single(0x0860, 0x086A, "syrc"),
    R::single(0x0870, 0x088E, "arab"),
    R::single(0x0890, 0x0891, "arab"),
    R::single(0x0898, 0x08E1, "arab"),
    R::single(0x08E2, 0x08E2, "zyyy"),
    R::single(0x08E3, 0x08FF, "arab"),
    R::single(0x0900, 0x0950, "deva"),
    R::single(0x0951, 0x0954, "zinh"),
    R::single(0x0955, 0x0963, "deva"),
    R::single(0x0964, 0x0965, "zyyy"),
    R::single(0x0966, 0x097F, "deva"),
    R::single(0x0980, 0x0983, "beng"),
    R::single(0x0985, 0x098C, "beng"),
    R::single(0x098F, 0x0990, "beng"),
    R::single(0x0993, 0x09A8, "beng"),
    R::single(0x09AA, 0x09B0, "beng"),
    R::single(0x09B2, 0x09B2, "beng"),
    R::single(0x09B6, 0x09B9, "beng"),
    R::single(0x09BC, 0x09C4, "beng"),
    R::single(0x09C7, 0x09C8, "beng"),
    R::single(0x09CB, 0x09CE, "beng"),
    R::single(0x09D7, 0x09D7, "beng"),
    R::single(0x09DC, 0x09DD, "beng"),
    R::single(0x09DF, 0x09E3, "beng"),
    R::single(0x09E6, 0x09FE, "beng"),
    R::single(0x0A01, 0x0A03, "guru"),
    R::single(0x0A05, 0x0A0A, "guru"),
    R::single(0x0A0F, 0x0A10, "guru"),
    R::single(0x0A13, 0x0A28, "guru"),
    R::single(0x0A2A, 0x0A30, "guru"),
    R::single(0x0A32, 0x0A33, "guru"),
    R::single(0x0A35, 0x0A36, "guru"),
    R::single(0x0A38, 0x0A39, "guru"),
    R::single(0x0A3C, 0x0A3C, "guru"),
    R::single(0x0A3E, 0x0A42, "guru"),
    R::single(0x0A47, 0x0A48, "guru"),
    R::single(0x0A4B, 0x0A4D, "guru"),
    R::single(0x0A51, 0x0A51, "guru"),
    R::single(0x0A59, 0x0A5C, "guru"),
    R::single(0x0A5E, 0x0A5E, "guru"),
    R::single(0x0A66, 0x0A76, "guru"),
    R::single(0x0A81, 0x0A83, "gujr"),
    R::single(0x0A85, 0x0A8D, "gujr"),
    R::single(0x0A8F, 0x0A91, "gujr"),
    R::single(0x0A93, 0x0AA8, "gujr"),
    R::single(0x0AAA, 0x0AB0, "gujr"),
    R::single(0x0AB2, 0x0AB3, "gujr"),
    R::single(0x0AB5, 0x0AB9, "gujr"),
    R::single(0x0ABC, 0x0AC5, "gujr"),
    R::single(0x0AC7, 0x0AC9, "gujr"),
    R::single(0x0ACB, 0x0ACD, "gujr"),
    R::single(0x0AD0, 0x0AD0, "gujr"),
    R::single(0x0AE0, 0x0AE3, "gujr"),
    R::single(0x0AE6, 0x0AF1, "gujr"),
    R::single(0x0AF9, 0x0AFF, "gujr"),
    R::single(0x0B01, 0x0B03, "orya"),
    R::single(0x0B05, 0x0B0C, "orya"),
    R::single(0x0B0F, 0x0B10, "orya"),
    R::single(0x0B13, 0x0B28, "orya"),
    R::single(0x0B2A, 0x0B30, "orya"),
    R::single(0x0B32, 0x0B33, "orya"),
    R::single(0x0B35, 0x0B39, "orya"),
    R::single(0x0B3C, 0x0B44, "orya"),
    R::single(0x0B47, 0x0B48, "orya"),
    R::single(0x0B4B, 0x0B4D, "orya"),
    R::single(0x0B55, 0x0B57, "orya"),
    R::single(0x0B5C, 0x0B5D, "orya"),
    R::single(0x0B5F, 0x0B63, "orya"),
    R::single(0x0B66, 0x0B77, "orya"),
    R::single(0x0B82, 0x0B83, "taml"),
    R::single(0x0B85, 0x0B8A, "taml"),
    R::single(0x0B8E, 0x0B90, "taml"),
    R::single(0x0B92, 0x0B95, "taml"),
    R::single(0x0B99, 0x0B9A, "taml"),
    R::single(0x0B9C, 0x0B9C, "taml"),
    R::single(0x0B9E, 0x0B9F, "taml"),
    R::single(0x0BA3, 0x0BA4, "taml"),
    R::single(0x0BA8, 0x0BAA, "taml"),
    R::single(0x0BAE, 0x0BB9, "taml"),
    R::single(0x0BBE, 0x0BC2, "taml"),
    R::single(0x0BC6, 0x0BC8, "taml"),
    R::single(0x0BCA, 0x0BCD, "taml"),
    R::single(0x0BD0, 0x0BD0, "taml"),
    R::single(0x0BD7, 0x0BD7, "taml"),
    R::single(0x0BE6, 0x0BFA, "taml"),
    R::single(0x0C00, 0x0C0C, "telu"),
    R::single(0x0C0E, 0x0C10, "telu"),
    R::single(0x0C12, 0x0C28, "telu"),
    R::single(0x0C2A, 0x0C39, "telu"),
    R::single(0x0C3C, 0x0C44, "telu"),
    R::single(0x0C46, 0x0C48, "telu"),
    R::single(0x0C4A, 0x0C4D, "telu"),
    R::single(0x0C55, 0x0C56, "telu"),
    R::single(0x0C58, 0x0C5A, "telu"),
    R::single(0x0C5D, 0x0C5D, "telu"),
    R::single(0x0C60, 0x0C63, "telu"),
    R::single(0x0C66, 0x0C6F, "telu"),
    R::single(0x0C77, 0x0C7F, "telu"),
    R::single(0x0C80, 0x0C8C, "knda"),
    R::single(0x0C8E, 0x0C90, "knda"),
    R::single(0x0C92, 0x0CA8, "knda"),
    R::single(0x0CAA, 0x0CB3, "knda"),
    R::single(0x0CB5, 0x0CB9, "knda"),
    R::single(0x0CBC, 0x0CC4, "knda"),
    R::single(0x0CC6, 0x0CC8, "knda"),
    R::single(0x0CCA, 0x0CCD, "knda"),
    R::single(0x0CD5, 0x0CD6, "knda"),
    R::single(0x0CDD, 0x0CDE, "knda"),
    R::single(0x0CE0, 0x0CE3, "knda"),
    R::single(0x0CE6, 0x0CEF, "knda"),
    R::single(0x0CF1, 0x0CF2, "knda"),
    R::single(0x0D00, 0x0D0C, "mlym"),
    R::single(0x0D0E, 0x0D10, "mlym"),
    R::single(0x0D12, 0x0D44, "mlym"),
    R::single(0x0D46, 0x0D48, "mlym"),
    R::single(0x0D4A, 0x0D4F, "mlym"),
    R::single(0x0D54, 0x0D63, "mlym"),
    R::single(0x0D66, 0x0D7F, "mlym"),
    R::single(0x0D81, 0x0D83, "sinh"),
    R::single(0x0D85, 0x0D96, "sinh"),
    R::single(0x0D9A, 0x0DB1, "sinh"),
    R::single(0x0DB3, 0x0DBB, "sinh"),
    R::single(0x0DBD, 0x0DBD, "sinh"),
    R::single(0x0DC0, 0x0DC6, "sinh"),
    R::single(0x0DCA, 0x0DCA, "sinh"),
    R::single(0x0DCF, 0x0DD4, "sinh"),
    R::single(0x0DD6, 0x0DD6, "sinh"),
    R::single(0x0DD8, 0x0DDF, "sinh"),
    R::single(0x0DE6, 0x0DEF, "sinh"),
    R::single(0x0DF2, 0x0DF4, "sinh"),
    R::single(0x0E01, 0x0E3A, "thai"),
    R::single(0x0E3F, 0x0E3F, "zyyy"),
    R::single(0x0E40, 0x0E5B, "thai"),
    R::single(0x0E81, 0x0E82, "laoo"),
    R::single(0x0E84, 0x0E84, "laoo"),
    R::single(0x0E86, 0x0E8A, "laoo"),
    R::single(0x0E8C, 0x0EA3, "laoo"),
    R::single(0x0EA5, 0x0EA5, "laoo"),
    R::single(0x0EA7, 0x0EBD, "laoo"),
    R::single(0x0EC0, 0x0EC4, "laoo"),
    R::single(0x0EC6, 0x0EC6, "laoo"),
    R::single(0x0EC8, 0x0ECD, "laoo"),
    R::single(0x0ED0, 0x0ED9, "laoo"),
    R::single(0x0EDC, 0x0EDF, "laoo"),
    R::single(0x0F00, 0x0F47, "tibt"),
    R::single(0x0F49, 0x0F6C, "tibt"),
    R::single(0x0F71, 0x0F97, "tibt"),
    R::single(0x0F99, 0x0FBC, "tibt"),
    R::single(0x0FBE, 0x0FCC, "tibt"),
    R::single(0x0FCE, 0x0FD4, "tibt"),
    R::single(0x0FD5, 0x0FD8, "zyyy"),
    R::single(0x0FD9, 0x0FDA, "tibt"),
    R::single(0x1000, 0x109F, "mymr"),
    R::single(0x10A0, 0x10C5, "geor"),
    R::single(0x10C7, 0x10C7, "geor"),
    R::single(0x10CD, 0x10CD, "geor"),
    R::single(0x10D0, 0x10FA, "geor"),
    R::single(0x10FB, 0x10FB, "zyyy"),
    R::single(0x10FC, 0x10FF, "geor"),
    R::single(0x1100, 0x11FF, "hang"),
    R::single(0x1200, 0x1248, "ethi"),
    R::single(0x124A, 0x124D, "ethi"),
    R::single(0x1250, 0x1256, "ethi"),
    R::single(0x1258, 0x1258, "ethi"),
    R::single(0x125A, 0x125D, "ethi"),
    R::single(0x1260, 0x1288, "ethi"),
    R::single(0x128A, 0x128D, "ethi"),
    R::single(0x1290, 0x12B0, "ethi"),
    R::single(0x12B2, 0x12B5, "ethi"),
    R::single(0x12B8, 0x12BE, "ethi"),
    R::single(0x12C0, 0x12C0, "ethi"),
    R::single(0x12C2, 0x12C5, "ethi"),
    R::single(0x12C8, 0x12D6, "ethi"),
    R::single(0x12D8, 0x1310, "ethi"),
    R::single(0x1312, 0x1315, "ethi"),
    R::single(0x1318, 0x135A, "ethi"),
    R::single(0x135D, 0x137C, "ethi"),
    R::single(0x1380, 0x1399, "ethi"),
    R::single(0x13A0, 0x13F5, "cher"),
    R::single(0x13F8, 0x13FD, "cher"),
    R::single(0x1400, 0x167F, "cans"),
    R::single(0x1680, 0x169C, "ogam"),
    R::single(0x16A0, 0x16EA, "runr"),
    R::single(0x16EB, 0x16ED, "zyyy"),
    R::single(0x16EE, 0x16F8, "runr"),
    R::single(0x1700, 0x1715, "tglg"),
    R::single(0x171F, 0x171F, "tglg"),
    R::single(0x1720, 0x1734, "hano"),
    R::single(0x1735, 0x1736, "zyyy"),
    R::single(0x1740, 0x1753, "buhd"),
    R::single(0x1760, 0x176C, "tagb"),
    R::single(0x176E, 0x1770, "tagb"),
    R::single(0x1772, 0x1773, "tagb"),
    R::single(0x1780, 0x17DD, "khmr"),
    R::single(0x17E0, 0x17E9, "khmr"),
    R::single(0x17F0, 0x17F9, "khmr"),
    R::single(0x1800, 0x1801, "mong"),
    R::single(0x1802, 0x1803, "zyyy"),
    R::single(0x1804, 0x1804, "mong"),
    R::single(0x1805, 0x1805, "zyyy"),
    R::single(0x1806, 0x1819, "mong"),
    R::single(0x1820, 0x1878, "mong"),
    R::single(0x1880, 0x18AA, "mong"),
    R::single(0x18B0, 0x18F5, "cans"),
    R::single(0x1900, 0x191E, "limb"),
    R::single(0x1920, 0x192B, "limb"),
    R::single(0x1930, 0x193B, "limb"),
    R::single(0x1940, 0x1940, "limb"),
    R::single(0x1944, 0x194F, "limb"),
    R::single(0x1950, 0x196D, "tale"),
    R::single(0x1970, 0x1974, "tale"),
    R::single(0x1980, 0x19AB, "talu"),
    R::single(0x19B0, 0x19C9, "talu"),
    R::single(0x19D0, 0x19DA, "talu"),
    R::single(0x19DE, 0x19DF, "talu"),
    R::single(0x19E0, 0x19FF, "khmr"),
    R::single(0x1A00, 0x1A1B, "bugi"),
    R::single(0x1A1E, 0x1A1F, "bugi"),
    R::single(0x1A20, 0x1A5E, "lana"),
    R::single(0x1A60, 0x1A7C, "lana"),
    R::single(0x1A7F, 0x1A89, "lana"),
    R::single(0x1A90, 0x1A99, "lana"),
    R::single(0x1AA0, 0x1AAD, "lana"),
    R::single(0x1AB0, 0x1ACE, "zinh"),
    R::single(0x1B00, 0x1B4C, "bali"),
    R::single(0x1B50, 0x1B7E, "bali"),
    R::single(0x1B80, 0x1BBF, "sund"),
    R::single(0x1BC0, 0x1BF3, "batk"),
    R::single(0x1BFC, 0x1BFF, "batk"),
    R::single(0x1C00, 0x1C37, "lepc"),
    R::single(0x1C3B, 0x1C49, "lepc"),
    R::single(0x1C4D, 0x1C4F, "lepc"),
    R::single(0x1C50, 0x1C7F, "olck"),
    R::single(0x1C80, 0x1C88, "cyrl"),
    R::single(0x1C90, 0x1CBA, "geor"),
    R::single(0x1CBD, 0x1CBF, "geor"),
    R::single(0x1CC0, 0x1CC7, "sund"),
    R::single(0x1CD0, 0x1CD2, "zinh"),
    R::single(0x1CD3, 0x1CD3, "zyyy"),
    R::single(0x1CD4, 0x1CE0, "zinh"),
    R::single(0x1CE1, 0x1CE1, "zyyy"),
    R::single(0x1CE2, 0x1CE8, "zinh"),
    R::single(0x1CE9, 0x1CEC, "zyyy"),
    R::single(0x1CED, 0x1CED, "zinh"),
    R::single(0x1CEE, 0x1CF3, "zyyy"),
    R::single(0x1CF4, 0x1CF4, "zinh"),
    R::single(0x1CF5, 0x1CF7, "zyyy"),
    R::single(0x1CF8, 0x1CF9, "zinh"),
    R::single(0x1CFA, 0x1CFA, "zyyy"),
    R::single(0x1D00, 0x1D25, "latn"),
    R::single(0x1D26, 0x1D2A, "grek"),
    R::single(0x1D2B, 0x1D2B, "cyrl"),
    R::single(0x1D2C, 0x1D5C, "latn"),
    R::single(0x1D5D, 0x1D61, "grek"),
    R::single(0x1D62, 0x1D65, "latn"),
    R::single(0x1D66, 0x1D6A, "grek"),
    R::single(0x1D6B, 0x1D77, "latn"),
    R::single(0x1D78, 0x1D78, "cyrl"),
    R::single(0x1D79, 0x1DBE, "latn"),
    R::single(0x1DBF, 0x1DBF, "grek"),
    R::single(0x1DC0, 0x1DFF, "zinh"),
    R::single(0x1E00, 0x1EFF, "latn"),
    R::single(0x1F00, 0x1F15, "grek"),
    R::single(0x1F18, 0x1F1D, "grek"),
    R::single(0x1F20, 0x1F45, "grek"),
    R::single(0x1F48, 0x1F4D, "grek"),
    R::single(0x1F50, 0x1F57, "grek"),
    R::single(0x1F59, 0x1F59, "grek"),
    R::single(0x1F5B, 0x1F5B, "grek"),
    R::single(0x1F5D, 0x1F5D, "grek"),
    R::single(0x1F5F, 0x1F7D, "grek"),
    R::single(0x1F80, 0x1FB4, "grek"),
    R::single(0x1FB6, 0x1FC4, "grek"),
    R::single(0x1FC6, 0x1FD3, "grek"),
    R::single(0x1FD6, 0x1FDB, "grek"),
    R::single(0x1FDD, 0x1FEF, "grek"),
    R::single(0x1FF2, 0x1FF4, "grek"),
    R::single(0x1FF6, 0x1FFE, "grek"),
    R::single(0x2000, 0x200B, "zyyy"),
    R::single(0x200C, 0x200D, "zinh"),
    R::single(0x200E, 0x2064, "zyyy"),
    R::single(0x2066, 0x2070, "zyyy"),
    R::single(0x2071, 0x2071, "latn"),
    R::single(0x2074, 0x207E, "zyyy"),
    R::single(0x207F, 0x207F, "latn"),
    R::single(0x2080, 0x208E, "zyyy"),
    R::single(0x2090, 0x209C, "latn"),
    R::single(0x20A0, 0x20C0, "zyyy"),
    R::single(0x20D0, 0x20F0, "zinh"),
    R::single(0x2100, 0x2125, "zyyy"),
    R::single(0x2126, 0x2126, "grek"),
    R::single(0x2127, 0x2129, "zyyy"),
    R::single(0x212A, 0x212B, "latn"),
    R::single(0x212C, 0x2131, "zyyy"),
    R::single(0x2132, 0x2132, "latn"),
    R::single(0x2133, 0x214D, "zyyy"),
    R::single(0x214E, 0x214E, "latn"),
    R::single(0x214F, 0x215F, "zyyy"),
    R::single(0x2160, 0x2188, "latn"),
    R::single(0x2189, 0x218B, "zyyy"),
    R::single(0x2190, 0x2426, "zyyy"),
    R::single(0x2440, 0x244A, "zyyy"),
    R::single(0x2460, 0x27FF, "zyyy"),
    R::single(0x2800, 0x28FF, "brai"),
    R::single(0x2900, 0x2B73, "zyyy"),
    R::single(0x2B76, 0x2B95, "zyyy"),
    R::single(0x2B97, 0x2BFF, "zyyy"),
    R::single(0x2C00, 0x2C5F, "glag"),
    R::single(0x2C60, 0x2C7F, "latn"),
    R::single(0x2C80, 0x2CF3, "copt"),
    R::single(0x2CF9, 0x2CFF, "copt"),
    R::single(0x2D00, 0x2D25, "geor"),
    R::single(0x2D27, 0x2D27, "geor"),
    R::single(0x2D2D, 0x2D2D, "geor"),
    R::single(0x2D30, 0x2D67, "tfng"),
    R::single(0x2D6F, 0x2D70, "tfng"),
    R::single(0x2D7F, 0x2D7F, "tfng"),
    R::single(0x2D80, 0x2D96, "ethi"),
    R::single(0x2DA0, 0x2DA6, "ethi"),
    R::single(0x2DA8, 0x2DAE, "ethi"),
    R::single(0x2DB0, 0x2DB6, "ethi"),
    R::single(0x2DB8, 0x2DBE, "ethi"),
    R::single(0x2DC0, 0x2DC6, "ethi"),
    R::single(0x2DC8, 0x2DCE, "ethi"),
    R::single(0x2DD0, 0x2DD6, "ethi"),
    R::single(0x2DD8, 0x2DDE, "ethi"),
    R::single(0x2DE0, 0x2DFF, "cyrl"),
    R::single(0x2E00, 0x2E5D, "zyyy"),
    R::single(0x2E80, 0x2E99, "hani"),
    R::single(0x2E9B, 0x2EF3, "hani"),
    R::single(0x2F00, 0x2FD5, "hani"),
    R::single(0x2FF0, 0x2FFB, "zyyy"),
    R::single(0x3000, 0x3004, "zyyy"),
    R::single(0x3005, 0x3005, "hani"),
    R::single(0x3006, 0x3006, "zyyy"),
    R::single(0x3007, 0x3007, "hani"),
    R::single(0x3008, 0x3020, "zyyy"),
    R::single(0x3021, 0x3029, "hani"),
    R::single(0x302A, 0x302D, "zinh"),
    R::single(0x302E, 0x302F, "hang"),
    R::single(0x3030, 0x3037, "zyyy"),
    R::single(0x3038, 0x303B, "hani"),
    R::single(0x303C, 0x303F, "zyyy"),
    R::single(0x3041, 0x3096, "hira"),
    R::single(0x3099, 0x309A, "zinh"),
    R::single(0x309B, 0x309C, "zyyy"),
    R::single(0x309D, 0x309F, "hira"),
    R::single(0x30A0, 0x30A0, "zyyy"),
    R::single(0x30A1, 0x30FA, "kana"),
    R::single(0x30FB, 0x30FC, "zyyy"),
    R::single(0x30FD, 0x30FF, "kana"),
    R::single(0x3105, 0x312F, "bopo"),
    R::single(0x3131, 0x318E, "hang"),
    R::single(0x3190, 0x319F, "zyyy"),
    R::single(0x31A0, 0x31BF, "bopo"),
    R::single(0x31C0, 0x31E3, "zyyy"),
    R::single(0x31F0, 0x31FF, "kana"),
    R::single(0x3200, 0x321E, "hang"),
    R::single(0x3220, 0x325F, "zyyy"),
    R::single(0x3260, 0x327E, "hang"),
    R::single(0x327F, 0x32CF, "zyyy"),
    R::single(0x32D0, 0x32FE, "kana"),
    R::single(0x32FF, 0x32FF, "zyyy"),
    R::single(0x3300, 0x3357, "kana"),
    R::single(0x3358, 0x33FF, "zyyy"),
    R::single(0x3400, 0x4DBF, "hani"),
    R::single(0x4DC0, 0x4DFF, "zyyy"),
    R::single(0x4E00, 0x9FFF, "hani"),
    R::single(0xA000, 0xA48C, "yiii"),
    R::single(0xA490, 0xA4C6, "yiii"),
    R::single(0xA4D0, 0xA4FF, "lisu"),
    R::single(0xA500, 0xA62B, "vaii"),
    R::single(0xA640, 0xA69F, "cyrl"),
    R::single(0xA6A0, 0xA6F7, "bamu"),
    R::single(0xA700, 0xA721, "zyyy"),
    R::single(0xA722, 0xA787, "latn"),
    R::single(0xA788, 0xA78A, "zyyy"),
    R::single(0xA78B, 0xA7CA, "latn"),
    R::single(0xA7D0, 0xA7D1, "latn"),
    R::single(0xA7D3, 0xA7D3, "latn"),
    R::single(0xA7D5, 0xA7D9, "latn"),
    R::single(0xA7F2, 0xA7FF, "latn"),
    R::single(0xA800, 0xA82C, "sylo"),
    R::single(0xA830, 0xA839, "zyyy"),
    R::single(0xA840, 0xA877, "phag"),
    R::single(0xA880, 0xA8C5, "saur"),
    R::single(0xA8CE, 0xA8D9, "saur"),
    R::single(0xA8E0, 0xA8FF, "deva"),
    R::single(0xA900, 0xA92D, "kali"),
    R::single(0xA92E, 0xA92E, "zyyy"),
    R::single(0xA92F, 0xA92F, "kali"),
    R::single(0xA930, 0xA953, "rjng"),
    R::single(0xA95F, 0xA95F, "rjng"),
    R::single(0xA960, 0xA97C, "hang"),
    R::single(0xA980, 0xA9CD, "java"),
    R::single(0xA9CF, 0xA9CF, "zyyy"),
    R::single(0xA9D0, 0xA9D9, "java"),
    R::single(0xA9DE, 0xA9DF, "java"),
    R::single(0xA9E0, 0xA9FE, "mymr"),
    R::single(0xAA00, 0xAA36, "cham"),
    R::single(0xAA40, 0xAA4D, "cham"),
    R::single(0xAA50, 0xAA59, "cham"),
    R::single(0xAA5C, 0xAA5F, "cham"),
    R::single(0xAA60, 0xAA7F, "mymr"),
    R::single(0xAA80, 0xAAC2, "tavt"),
    R::single(0xAADB, 0xAADF, "tavt"),
    R::single(0xAAE0, 0xAAF6, "mtei"),
    R::single(0xAB01, 0xAB06, "ethi"),
    R::single(0xAB09, 0xAB0E, "ethi"),
    R::single(0xAB11, 0xAB16, "ethi"),
    R::single(0xAB20, 0xAB26, "ethi"),
    R::single(0xAB28, 0xAB2E, "ethi"),
    R::single(0xAB30, 0xAB5A, "latn"),
    R::single(0xAB5B, 0xAB5B, "zyyy"),
    R::single(0xAB5C, 0xAB64, "latn"),
    R::single(0xAB65, 0xAB65, "grek"),
    R::single(0xAB66, 0xAB69, "latn"),
    R::single(0xAB6A, 0xAB6B, "zyyy"),
    R::single(0xAB70, 0xABBF, "cher"),
    R::single(0xABC0, 0xABED, "mtei"),
    R::single(0xABF0, 0xABF9, "mtei"),
    R::single(0xAC00, 0xD7A3, "hang"),
    R::single(0xD7B0, 0xD7C6, "hang"),
    R::single(0xD7CB, 0xD7FB, "hang"),
    R::single(0xF900, 0xFA6D, "hani"),
    R::single(0xFA70, 0xFAD9, "hani"),
    R::single(0xFB00, 0xFB06, "latn"),
    R::single(0xFB13, 0xFB17, "armn"),
    R::single(0xFB1D, 0xFB36, "hebr"),
    R::single(0xFB38, 0xFB3C, "hebr"),
    R::single(0xFB3E, 0xFB3E, "hebr"),
    R::single(0xFB40, 0xFB41, "hebr"),
    R::single(0xFB43, 0xFB44, "hebr"),
    R::single(0xFB46, 0xFB4F, "hebr"),
    R::single(0xFB50, 0xFBC2, "arab"),
    R::single(0xFBD3, 0xFD3D, "arab"),
    R::single(0xFD3E, 0xFD3F, "zyyy"),
    R::single(0xFD40, 0xFD8F, "arab"),
    R::single(0xFD92, 0xFDC7, "arab"),
    R::single(0xFDCF, 0xFDCF, "arab"),
    R::single(0xFDF0, 0xFDFF, "arab"),
    R::single(0xFE00, 0xFE0F, "zinh"),
    R::single(0xFE10, 0xFE19, "zyyy"),
    R::single(0xFE20, 0xFE2D, "zinh"),
    R::single(0xFE2E, 0xFE2F, "cyrl"),
    R::single(0xFE30, 0xFE52, "zyyy"),
    R::single(0xFE54, 0xFE66, "zyyy"),
    R::single(0xFE68, 0xFE6B, "zyyy"),
    R::single(0xFE70, 0xFE74, "arab"),
    R::single(0xFE76, 0xFEFC, "arab"),
    R::single(0xFEFF, 0xFEFF, "zyyy"),
    R::single(0xFF01, 0xFF20, "zyyy"),
    R::single(0xFF21, 0xFF3A, "latn"),
    R::single(0xFF3B, 0xFF40, "zyyy"),
    R::single(0xFF41, 0xFF5A, "latn"),
    R::single(0xFF5B, 0xFF65, "zyyy"),
    R::single(0xFF66, 0xFF6F, "kana"),
    R::single(0xFF70, 0xFF70, "zyyy"),
    R::single(0xFF71, 0xFF9D, "kana"),
    R::single(0xFF9E, 0xFF9F, "zyyy"),
    R::single(0xFFA0, 0xFFBE, "hang"),
    R::single(0xFFC2, 0xFFC7, "hang"),
    R::single(0xFFCA, 0xFFCF, "hang"),
    R::single(0xFFD2, 0xFFD7, "hang"),
    R::single(0xFFDA, 0xFFDC, "hang"),
    R::single(0xFFE0, 0xFFE6, "zyyy"),
    R::single(0xFFE8, 0xFFEE, "zyyy"),
    R::single(0xFFF9, 0xFFFD, "zyyy"),
    R::single(0x10000, 0x1000B, "linb"),
    R::single(0x1000D, 0x10026, "linb"),
    R::single(0x10028, 0x1003A, "linb"),
    R::single(0x1003C, 0x1003D, "linb"),
    R::single(0x1003F, 0x1004D, "linb"),
    R::single(0x10050, 0x1005D, "linb"),
    R::single(0x10080, 0x100FA, "linb"),
    R::single(0x10100, 0x10102, "zyyy"),
    R::single(0x10107, 0x10133, "zyyy"),
    R::single(0x10137, 0x1013F, "zyyy"),
    R::single(0x10140, 0x1018E, "grek"),
    R::single(0x10190, 0x1019C, "zyyy"),
    R::single(0x101A0, 0x101A0, "grek"),
    R::single(0x101D0, 0x101FC, "zyyy"),
    R::single(0x101FD, 0x101FD, "zinh"),
    R::single(0x10280, 0x1029C, "lyci"),
    R::single(0x102A0, 0x102D0, "cari"),
    R::single(0x102E0, 0x102E0, "zinh"),
    R::single(0x102E1, 0x102FB, "zyyy"),
    R::single(0x10300, 0x10323, "ital"),
    R::single(0x1032D, 0x1032F, "ital"),
    R::single(0x10330, 0x1034A, "goth"),
    R::single(0x10350, 0x1037A, "perm"),
    R::single(0x10380, 0x1039D, "ugar"),
    R::single(0x1039F, 0x1039F, "ugar"),
    R::single(0x103A0, 0x103C3, "xpeo"),
    R::single(0x103C8, 0x103D5, "xpeo"),
    R::single(0x10400, 0x1044F, "dsrt"),
    R::single(0x10450, 0x1047F, "shaw"),
    R::single(0x10480, 0x1049D, "osma"),
    R::single(0x104A0, 0x104A9, "osma"),
    R::single(0x104B0, 0x104D3, "osge"),
    R::single(0x104D8, 0x104FB, "osge"),
    R::single(0x10500, 0x10527, "elba"),
    R::single(0x10530, 0x10563, "aghb"),
    R::single(0x1056F, 0x1056F, "aghb"),
    R::single(0x10570, 0x1057A, "vith"),
    R::single(0x1057C, 0x1058A, "vith"),
    R::single(0x1058C, 0x10592, "vith"),
    R::single(0x10594, 0x10595, "vith"),
    R::single(0x10597, 0x105A1, "vith"),
    R::single(0x105A3, 0x105B1, "vith"),
    R::single(0x105B3, 0x105B9, "vith"),
    R::single(0x105BB, 0x105BC, "vith"),
    R::single(0x10600, 0x10736, "lina"),
    R::single(0x10740, 0x10755, "lina"),
    R::single(0x10760, 0x10767, "lina"),
    R::single(0x10780, 0x10785, "latn"),
    R::single(0x10787, 0x107B0, "latn"),
    R::single(0x107B2, 0x107BA, "latn"),
    R::single(0x10800, 0x10805, "cprt"),
    R::single(0x10808, 0x10808, "cprt"),
    R::single(0x1080A, 0x10835, "cprt"),
    R::single(0x10837, 0x10838, "cprt"),
    R::single(0x1083C, 0x1083C, "cprt"),
    R::single(0x1083F, 0x1083F, "cprt"),
    R::single(0x10840, 0x10855, "armi"),
    R::single(0x10857, 0x1085F, "armi"),
    R::single(0x10860, 0x1087F, "palm"),
    R::single(0x10880, 0x1089E, "nbat"),
    R::single(0x108A7, 0x108AF, "nbat"),
    R::single(0x108E0, 0x108F2, "hatr"),
    R::single(0x108F4, 0x108F5, "hatr"),
    R::single(0x108FB, 0x108FF, "hatr"),
    R::single(0x10900, 0x1091B, "phnx"),
    R::single(0x1091F, 0x1091F, "phnx"),
    R::single(0x10920, 0x10939, "lydi"),
    R::single(0x1093F, 0x1093F, "lydi"),
    R::single(0x10980, 0x1099F, "mero"),
    R::single(0x109A0, 0x109B7, "merc"),
    R::single(0x109BC, 0x109CF, "merc"),
    R::single(0x109D2, 0x109FF, "merc"),
    R::single(0x10A00, 0x10A03, "khar"),
    R::single(0x10A05, 0x10A06, "khar"),
    R::single(0x10A0C, 0x10A13, "khar"),
    R::single(0x10A15, 0x10A17, "khar"),
    R::single(0x10A19, 0x10A35, "khar"),
    R::single(0x10A38, 0x10A3A, "khar"),
    R::single(0x10A3F, 0x10A48, "khar"),
    R::single(0x10A50, 0x10A58, "khar"),
    R::single(0x10A60, 0x10A7F, "sarb"),
    R::single(0x10A80, 0x10A9F, "narb"),
    R::single(0x10AC0, 0x10AE6, "mani"),
    R::single(0x10AEB, 0x10AF6, "mani"),
    R::single(0x10B00, 0x10B35, "avst"),
    R::single(0x10B39, 0x10B3F, "avst"),
    R::single(0x10B40, 0x10B55, "prti"),
    R::single(0x10B58, 0x10B5F, "prti"),
    R::single(0x10B60, 0x10B72, "phli"),
    R::single(0x10B78, 0x10B7F, "phli"),
    R::single(0x10B80, 0x10B91, "phlp"),
    R::single(0x10B99, 0x10B9C, "phlp"),
    R::single(0x10BA9, 0x10BAF, "phlp"),
    R::single(0x10C00, 0x10C48, "orkh"),
    R::single(0x10C80, 0x10CB2, "hung"),
    R::single(0x10CC0, 0x10CF2, "hung"),
    R::single(0x10CFA, 0x10CFF, "hung"),
    R::single(0x10D00, 0x10D27, "rohg"),
    R::single(0x10D30, 0x10D39, "rohg"),
    R::single(0x10E60, 0x10E7E, "arab"),
    R::single(0x10E80, 0x10EA9, "yezi"),
    R::single(0x10EAB, 0x10EAD, "yezi"),
    R::single(0x10EB0, 0x10EB1, "yezi"),
    R::single(0x10F00, 0x10F27, "sogo"),
    R::single(0x10F30, 0x10F59, "sogd"),
    R::single(0x10F70, 0x10F89, "ougr"),
    R::single(0x10FB0, 0x10FCB, "chrs"),
    R::single(0x10FE0, 0x10FF6, "elym"),
    R::single(0x11000, 0x1104D, "brah"),
    R::single(0x11052, 0x11075, "brah"),
    R::single(0x1107F, 0x1107F, "brah"),
    R::single(0x11080, 0x110C2, "kthi"),
    R::single(0x110CD, 0x110CD, "kthi"),
    R::single(0x110D0, 0x110E8, "sora"),
    R::single(0x110F0, 0x110F9, "sora"),
    R::single(0x11100, 0x11134, "cakm"),
    R::single(0x11136, 0x11147, "cakm"),
    R::single(0x11150, 0x11176, "mahj"),
    R::single(0x11180, 0x111DF, "shrd"),
    R::single(0x111E1, 0x111F4, "sinh"),
    R::single(0x11200, 0x11211, "khoj"),
    R::single(0x11213, 0x1123E, "khoj"),
    R::single(0x11280, 0x11286, "mult"),
    R::single(0x11288, 0x11288, "mult"),
    R::single(0x1128A, 0x1128D, "mult"),
    R::single(0x1128F, 0x1129D, "mult"),
    R::single(0x1129F, 0x112A9, "mult"),
    R::single(0x112B0, 0x112EA, "sind"),
    R::single(0x112F0, 0x112F9, "sind"),
    R::single(0x11300, 0x11303, "gran"),
    R::single(0x11305, 0x1130C, "gran"),
    R::single(0x1130F, 0x11310, "gran"),
    R::single(0x11313, 0x11328, "gran"),
    R::single(0x1132A, 0x11330, "gran"),
    R::single(0x11332, 0x11333, "gran"),
    R::single(0x11335, 0x11339, "gran"),
    R::single(0x1133B, 0x1133B, "zinh"),
    R::single(0x1133C, 0x11344, "gran"),
    R::single(0x11347, 0x11348, "gran"),
    R::single(0x1134B, 0x1134D, "gran"),
    R::single(0x11350, 0x11350, "gran"),
    R::single(0x11357, 0x11357, "gran"),
    R::single(0x1135D, 0x11363, "gran"),
    R::single(0x11366, 0x1136C, "gran"),
    R::single(0x11370, 0x11374, "gran"),
    R::single(0x11400, 0x1145B, "newa"),
    R::single(0x1145D, 0x11461, "newa"),
    R::single(0x11480, 0x114C7, "tirh"),
    R::single(0x114D0, 0x114D9, "tirh"),
    R::single(0x11580, 0x115B5, "sidd"),
    R::single(0x115B8, 0x115DD, "sidd"),
    R::single(0x11600, 0x11644, "modi"),
    R::single(0x11650, 0x11659, "modi"),
    R::single(0x11660, 0x1166C, "mong"),
    R::single(0x11680, 0x116B9, "takr"),
    R::single(0x116C0, 0x116C9, "takr"),
    R::single(0x11700, 0x1171A, "ahom"),
    R::single(0x1171D, 0x1172B, "ahom"),
    R::single(0x11730, 0x11746, "ahom"),
    R::single(0x11800, 0x1183B, "dogr"),
    R::single(0x118A0, 0x118F2, "wara"),
    R::single(0x118FF, 0x118FF, "wara"),
    R::single(0x11900, 0x11906, "diak"),
    R::single(0x11909, 0x11909, "diak"),
    R::single(0x1190C, 0x11913, "diak"),
    R::single(0x11915, 0x11916, "diak"),
    R::single(0x11918, 0x11935, "diak"),
    R::single(0x11937, 0x11938, "diak"),
    R::single(0x1193B, 0x11946, "diak"),
    R::single(0x11950, 0x11959, "diak"),
    R::single(0x119A0, 0x119A7, "nand"),
    R::single(0x119AA, 0x119D7, "nand"),
    R::single(0x119DA, 0x119E4, "nand"),
    R::single(0x11A00, 0x11A47, "zanb"),
    R::single(0x11A50, 0x11AA2, "soyo"),
    R::single(0x11AB0, 0x11ABF, "cans"),
    R::single(0x11AC0, 0x11AF8, "pauc"),
    R::single(0x11C00, 0x11C08, "bhks"),
    R::single(0x11C0A, 0x11C36, "bhks"),
    R::single(0x11C38, 0x11C45, "bhks"),
    R::single(0x11C50, 0x11C6C, "bhks"),
    R::single(0x11C70, 0x11C8F, "marc"),
    R::single(0x11C92, 0x11CA7, "marc"),
    R::single(0x11CA9, 0x11CB6, "marc"),
    R::single(0x11D00, 0x11D06, "gonm"),
    R::single(0x11D08, 0x11D09, "gonm"),
    R::single(0x11D0B, 0x11D36, "gonm"),
    R::single(0x11D3A, 0x11D3A, "gonm"),
    R::single(0x11D3C, 0x11D3D, "gonm"),
    R::single(0x11D3F, 0x11D47, "gonm"),
    R::single(0x11D50, 0x11D59, "gonm"),
    R::single(0x11D60, 0x11D65, "gong"),
    R::single(0x11D67, 0x11D68, "gong"),
    R::single(0x11D6A, 0x11D8E, "gong"),
    R::single(0x11D90, 0x11D91, "gong"),
    R::single(0x11D93, 0x11D98, "gong"),
    R::single(0x11DA0, 0x11DA9, "gong"),
    R::single(0x11EE0, 0x11EF8, "maka"),
    R::single(0x11FB0, 0x11FB0, "lisu"),
    R::single(0x11FC0, 0x11FF1, "taml"),
    R::single(0x11FFF, 0x11FFF, "taml"),
    R::single(0x12000, 0x12399, "xsux"),
    R::single(0x12400, 0x1246E, "xsux"),
    R::single(0x12470, 0x12474, "xsux"),
    R::single(0x12480, 0x12543, "xsux"),
    R::single(0x12F90, 0x12FF2, "cpmn"),
    R::single(0x13000, 0x1342E, "egyp"),
    R::single(0x13430, 0x13438, "egyp"),
    R::single(0x14400, 0x14646, "hluw"),
    R::single(0x16800, 0x16A38, "bamu"),
    R::single(0x16A40, 0x16A5E, "mroo"),
    R::single(0x16A60, 0x16A69, "mroo"),
    R::single(0x16A6E, 0x16A6F, "mroo"),
    R::single(0x16A70, 0x16ABE, "tnsa"),
    R::single(0x16AC0, 0x16AC9, "tnsa"),
    R::single(0x16AD0, 0x16AED, "bass"),
    R::single(0x16AF0, 0x16AF5, "bass"),
    R::single(0x16B00, 0x16B45, "hmng"),
    R::single(0x16B50, 0x16B59, "hmng"),
    R::single(0x16B5B, 0x16B61, "hmng"),
    R::single(0x16B63, 0x16B77, "hmng"),
    R::single(0x16B7D, 0x16B8F, "hmng"),
    R::single(0x16E40, 0x16E9A, "medf"),
    R::single(0x16F00, 0x16F4A, "plrd"),
    R::single(0x16F4F, 0x16F87, "plrd"),
    R::single(0x16F8F, 0x16F9F, "plrd"),
    R::single(0x16FE0, 0x16FE0, "tang"),
    R::single(0x16FE1, 0x16FE1, "nshu"),
    R::single(0x16FE2, 0x16FE3, "hani"),
    R::single(0x16FE4, 0x16FE4, "kits"),
    R::single(0x16FF0, 0x16FF1, "hani"),
    R::single(0x17000, 0x187F7, "tang"),
    R::single(0x18800, 0x18AFF, "tang"),
    R::single(0x18B00, 0x18CD5, "kits"),
    R::single(0x18D00, 0x18D08, "tang"),
    R::single(0x1AFF0, 0x1AFF3, "kana"),
    R::single(0x1AFF5, 0x1AFFB, "kana"),
    R::single(0x1AFFD, 0x1AFFE, "kana"),
    R::single(0x1B000, 0x1B000, "kana"),
    R::single(0x1B001, 0x1B11F, "hira"),
    R::single(0x1B120, 0x1B122, "kana"),
    R::single(0x1B150, 0x1B152, "hira"),
    R::single(0x1B164, 0x1B167, "kana"),
    R::single(0x1B170, 0x1B2FB, "nshu"),
    R::single(0x1BC00, 0x1BC6A, "dupl"),
    R::single(0x1BC70, 0x1BC7C, "dupl"),
    R::single(0x1BC80, 0x1BC88, "dupl"),
    R::single(0x1BC90, 0x1BC99, "dupl"),
    R::single(0x1BC9C, 0x1BC9F, "dupl"),
    R::single(0x1BCA0, 0x1BCA3, "zyyy"),
    R::single(0x1CF00, 0x1CF2D, "zinh"),
    R::single(0x1CF30, 0x1CF46, "zinh"),
    R::single(0x1CF50, 0x1CFC3, "zyyy"),
    R::single(0x1D000, 0x1D0F5, "zyyy"),
    R::single(0x1D100, 0x1D126, "zyyy"),
    R::single(0x1D129, 0x1D166, "zyyy"),
    R::single(0x1D167, 0x1D169, "zinh"),
    R::single(0x1D16A, 0x1D17A, "zyyy"),
    R::single(0x1D17B, 0x1D182, "zinh"),
    R::single(0x1D183, 0x1D184, "zyyy"),
    R::single(0x1D185, 0x1D18B, "zinh"),
    R::single(0x1D18C, 0x1D1A9, "zyyy"),
    R::single(0x1D1AA, 0x1D1AD, "zinh"),
    R::single(0x1D1AE, 0x1D1EA, "zyyy"),
    R::single(0x1D200, 0x1D245, "grek"),
    R::single(0x1D2E0, 0x1D2F3, "zyyy"),
    R::single(0x1D300, 0x1D356, "zyyy"),
    R::single(0x1D360, 0x1D378, "zyyy"),
    R::single(0x1D400, 0x1D454, "zyyy"),
    R::single(0x1D456, 0x1D49C, "zyyy"),
    R::single(0x1D49E, 0x1D49F, "zyyy"),
    R::single(0x1D4A2, 0x1D4A2, "zyyy"),
    R::single(0x1D4A5, 0x1D4A6, "zyyy"),
    R::single(0x1D4A9, 0x1D4AC, "zyyy"),
    R::single(0x1D4AE, 0x1D4B9, "zyyy"),
    R::single(0x1D4BB, 0x1D4BB, "zyyy"),
    R::single(0x1D4BD, 0x1D4C3, "zyyy"),
    R::single(0x1D4C5, 0x1D505, "zyyy"),
    R::single(0x1D507, 0x1D50A, "zyyy"),
    R::single(0x1D50D, 0x1D514, "zyyy"),
    R::single(0x1D516, 0x1D51C, "zyyy"),
    R::single(0x1D51E, 0x1D539, "zyyy"),
    R::single(0x1D53B, 0x1D53E, "zyyy"),
    R::single(0x1D540, 0x1D544, "zyyy"),
    R::single(0x1D546, 0x1D546, "zyyy"),
    R::single(0x1D54A, 0x1D550, "zyyy"),
    R::single(0x1D552, 0x1D6A5, "zyyy"),
    R::single(0x1D6A8, 0x1D7CB, "zyyy"),
    R::single(0x1D7CE, 0x1D7FF, "zyyy"),
    R::single(0x1D800, 0x1DA8B, "sgnw"),
    R::single(0x1DA9B, 0x1DA9F, "sgnw"),
    R::single(0x1DAA1, 0x1DAAF, "sgnw"),
    R::single(0x1DF00, 0x1DF1E, "latn"),
    R::single(0x1E000, 0x1E006, "glag"),
    R::single(0x1E008, 0x1E018, "glag"),
    R::single(0x1E01B, 0x1E021, "glag"),
    R::single(0x1E023, 0x1E024, "glag"),
    R::single(0x1E026, 0x1E02A, "glag"),
    R::single(0x1E100, 0x1E12C, "hmnp"),
    R::single(0x1E130, 0x1E13D, "hmnp"),
    R::single(0x1E140, 0x1E149, "hmnp"),
    R::single(0x1E14E, 0x1E14F, "hmnp"),
    R::single(0x1E290, 0x1E2AE, "toto"),
    R::single(0x1E2C0, 0x1E2F9, "wcho"),
    R::single(0x1E2FF, 0x1E2FF, "wcho"),
    R::single(0x1E7E0, 0x1E7E6, "ethi"),
    R::single(0x1E7E8, 0x1E7EB, "ethi"),
    R::single(0x1E7ED, 0x1E7EE, "ethi"),
    R::single(0x1E7F0, 0x1E7FE, "ethi"),
    R::single(0x1E800, 0x1E8C4, "mend"),
    R::single(0x1E8C7, 0x1E8D6, "mend"),
    R::single(0x1E900, 0x1E94B, "adlm"),
    R::single(0x1E950, 0x1E959, "adlm"),
    R::single(0x1E95E, 0x1E95F, "adlm"),
    R::single(0x1EC71, 0x1ECB4, "zyyy"),
    R::single(0x1ED01, 0x1ED3D, "zyyy"),
    R::single(0x1EE00, 0x1EE03, "arab"),
    R::single(0x1EE05, 0x1EE1F, "arab"),
    R::single(0x1EE21, 0x1EE22, "arab"),
    R::single(0x1EE24, 0x1EE24, "arab"),
    R::single(0x1EE27, 0x1EE27, "arab"),
    R::single(0x1EE29, 0x1EE32, "arab"),
    R::single(0x1EE34, 0x1EE37, "arab"),
    R::single(0x1EE39, 0x1EE39, "arab"),
    R::single(0x1EE3B, 0x1EE3B, "arab"),
    R::single(0x1EE42, 0x1EE42, "arab"),
    R::single(0x1EE47, 0x1EE47, "arab"),
    R::single(0x1EE49, 0x1EE49, "arab"),
    R::single(0x1EE4B, 0x1EE4B, "arab"),
    R::single(0x1EE4D, 0x1EE4F, "arab"),
    R::single(0x1EE51, 0x1EE52, "arab"),
    R::single(0x1EE54, 0x1EE54, "arab"),
    R::single(0x1EE57, 0x1EE57, "arab"),
    R::single(0x1EE59, 0x1EE59, "arab"),
    R::single(0x1EE5B, 0x1EE5B, "arab"),
    R::single(0x1EE5D, 0x1EE5D, "arab"),
    R::single(0x1EE5F, 0x1EE5F, "arab"),
    R::single(0x1EE61, 0x1EE62, "arab"),
    R::single(0x1EE64, 0x1EE64, "arab"),
    R::single(0x1EE67, 0x1EE6A, "arab"),
    R::single(0x1EE6C, 0x1EE72, "arab"),
    R::single(0x1EE74, 0x1EE77, "arab"),
    R::single(0x1EE79, 0x1EE7C, "arab"),
    R::single(0x1EE7E, 0x1EE7E, "arab"),
    R::single(0x1EE80, 0x1EE89, "arab"),
    R::single(0x1EE8B, 0x1EE9B, "arab"),
    R::single(0x1EEA1, 0x1EEA3, "arab"),
    R::single(0x1EEA5, 0x1EEA9, "arab"),
    R::single(0x1EEAB, 0x1EEBB, "arab"),
    R::single(0x1EEF0, 0x1EEF1, "arab"),
    R::single(0x1F000, 0x1F02B, "zyyy"),
    R::single(0x1F030, 0x1F093, "zyyy"),
    R::single(0x1F0A0, 0x1F0AE, "zyyy"),
    R::single(0x1F0B1, 0x1F0BF, "zyyy"),
    R::single(0x1F0C1, 0x1F0CF, "zyyy"),
    R::single(0x1F0D1, 0x1F0F5, "zyyy"),
    R::single(0x1F100, 0x1F1AD, "zyyy"),
    R::single(0x1F1E6, 0x1F1FF, "zyyy"),
    R::single(0x1F200, 0x1F200, "hira"),
    R::single(0x1F201, 0x1F202, "zyyy"),
    R::single(0x1F210, 0x1F23B, "zyyy"),
    R::single(0x1F240, 0x1F248, "zyyy"),
    R::single(0x1F250, 0x1F251, "zyyy"),
    R::single(0x1F260, 0x1F265, "zyyy"),
    R::single(0x1F300, 0x1F6D7, "zyyy"),
    R::single(0x1F6DD, 0x1F6EC, "zyyy"),
    R::single(0x1F6F0, 0x1F6FC, "zyyy"),
    R::single(0x1F700, 0x1F773, "zyyy"),
    R::single(0x1F780, 0x1F7D8, "zyyy"),
    R::single(0x1F7E0, 0x1F7EB, "zyyy"),
    R::single(0x1F7F0, 0x1F7F0, "zyyy"),
    R::single(0x1F800, 0x1F80B, "zyyy"),
    R::single(0x1F810, 0x1F847, "zyyy"),
    R::single(0x1F850, 0x1F859, "zyyy"),
    R::single(0x1F860, 0x1F887, "zyyy"),
    R::single(0x1F890, 0x1F8AD, "zyyy"),
    R::single(0x1F8B0, 0x1F8B1, "zyyy"),
    R::single(0x1F900, 0x1FA53, "zyyy"),
    R::single(0x1FA60, 0x1FA6D, "zyyy"),
    R::single(0x1FA70, 0x1FA74, "zyyy"),
    R::single(0x1FA78, 0x1FA7C, "zyyy"),
    R::single(0x1FA80, 0x1FA86, "zyyy"),
    R::single(0x1FA90, 0x1FAAC, "zyyy"),
    R::single(0x1FAB0, 0x1FABA, "zyyy"),
    R::single(0x1FAC0, 0x1FAC5, "zyyy"),
    R::single(0x1FAD0, 0x1FAD9, "zyyy"),
    R::single(0x1FAE0, 0x1FAE7, "zyyy"),
    R::single(0x1FAF0, 0x1FAF6, "zyyy"),
    R::single(0x1FB00, 0x1FB92, "zyyy"),
    R::single(0x1FB94, 0x1FBCA, "zyyy"),
    R::single(0x1FBF0, 0x1FBF9, "zyyy"),
    R::single(0x20000, 0x2A6DF, "hani"),
    R::single(0x2A700, 0x2B738, "hani"),
    R::single(0x2B740, 0x2B81D, "hani"),
    R::single(0x2B820, 0x2CEA1, "hani"),
    R::single(0x2CEB0, 0x2EBE0, "hani"),
    R::single(0x2F800, 0x2FA1D, "hani"),
    R::single(0x30000, 0x3134A, "hani"),
    R::single(0xE0001, 0xE0001, "zyyy"),
    R::single(0xE0020, 0xE007F, "zyyy"),
    R::single(0xE0100, 0xE01EF, "zinh"),
];
