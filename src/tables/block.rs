// Generated from:
// - https://www.unicode.org/Public/14.0.0/ucd/Blocks.txt
// - https://www.unicode.org/Public/14.0.0/ucd/PropertyValueAliases.txt
// Do not edit by hand.

use crate::block::Block;

pub const BLOCKS: &[Block] = &[
    Block::new(0x0000, 0x007F, "Basic_Latin", &["ASCII"]),
    Block::new(0x0080, 0x00FF, "Latin_1_Supplement", &["Latin_1_Sup", "Latin_1"]),
    Block::new(0x0100, 0x017F, "Latin_Extended_A", &["Latin_Ext_A"]),
    Block::new(0x0180, 0x024F, "Latin_Extended_B", &["Latin_Ext_B"]),
    Block::new(0x0250, 0x02AF, "IPA_Extensions", &["IPA_Ext"]),
    Block::new(0x02B0, 0x02FF, "Spacing_Modifier_Letters", &["Modifier_Letters"]),
    Block::new(0x0300, 0x036F, "Combining_Diacritical_Marks", &["Diacriticals"]),
    Block::new(0x0370, 0x03FF, "Greek_And_Coptic", &["Greek"]),
    Block::new(0x0400, 0x04FF, "Cyrillic", &[]),
    Block::new(0x0500, 0x052F, "Cyrillic_Supplement", &["Cyrillic_Sup", "Cyrillic_Supplementary"]),
    Block::new(0x0530, 0x058F, "Armenian", &[]),
    Block::new(0x0590, 0x05FF, "Hebrew", &[]),
    Block::new(0x0600, 0x06FF, "Arabic", &[]),
    Block::new(0x0700, 0x074F, "Syriac", &[]),
    Block::new(0x0750, 0x077F, "Arabic_Supplement", &["Arabic_Sup"]),
    Block::new(0x0780, 0x07BF, "Thaana", &[]),
    Block::new(0x07C0, 0x07FF, "NKo", &[]),
    Block::new(0x0800, 0x083F, "Samaritan", &[]),
    Block::new(0x0840, 0x085F, "Mandaic", &[]),
    Block::new(0x0860, 0x086F, "Syriac_Supplement", &["Syriac_Sup"]),
    Block::new(0x0870, 0x089F, "Arabic_Extended_B", &["Arabic_Ext_B"]),
    Block::new(0x08A0, 0x08FF, "Arabic_Extended_A", &["Arabic_Ext_A"]),
    Block::new(0x0900, 0x097F, "Devanagari", &[]),
    Block::new(0x0980, 0x09FF, "Bengali", &[]),
    Block::new(0x0A00, 0x0A7F, "Gurmukhi", &[]),
    Block::new(0x0A80, 0x0AFF, "Gujarati", &[]),
    Block::new(0x0B00, 0x0B7F, "Oriya", &[]),
    Block::new(0x0B80, 0x0BFF, "Tamil", &[]),
    Block::new(0x0C00, 0x0C7F, "Telugu", &[]),
    Block::new(0x0C80, 0x0CFF, "Kannada", &[]),
    Block::new(0x0D00, 0x0D7F, "Malayalam", &[]),
    Block::new(0x0D80, 0x0DFF, "Sinhala", &[]),
    Block::new(0x0E00, 0x0E7F, "Thai", &[]),
    Block::new(0x0E80, 0x0EFF, "Lao", &[]),
    Block::new(0x0F00, 0x0FFF, "Tibetan", &[]),
    Block::new(0x1000, 0x109F, "Myanmar", &[]),
    Block::new(0x10A0, 0x10FF, "Georgian", &[]),
    Block::new(0x1100, 0x11FF, "Hangul_Jamo", &["Jamo"]),
    Block::new(0x1200, 0x137F, "Ethiopic", &[]),
    Block::new(0x1380, 0x139F, "Ethiopic_Supplement", &["Ethiopic_Sup"]),
    Block::new(0x13A0, 0x13FF, "Cherokee", &[]),
    Block::new(0x1400, 0x167F, "Unified_Canadian_Aboriginal_Syllabics", &["UCAS", "Canadian_Syllabics"]),
    Block::new(0x1680, 0x169F, "Ogham", &[]),
    Block::new(0x16A0, 0x16FF, "Runic", &[]),
    Block::new(0x1700, 0x171F, "Tagalog", &[]),
    Block::new(0x1720, 0x173F, "Hanunoo", &[]),
    Block::new(0x1740, 0x175F, "Buhid", &[]),
    Block::new(0x1760, 0x177F, "Tagbanwa", &[]),
    Block::new(0x1780, 0x17FF, "Khmer", &[]),
    Block::new(0x1800, 0x18AF, "Mongolian", &[]),
    Block::new(0x18B0, 0x18FF, "Unified_Canadian_Aboriginal_Syllabics_Extended", &["UCAS_Ext"]),
    Block::new(0x1900, 0x194F, "Limbu", &[]),
    Block::new(0x1950, 0x197F, "Tai_Le", &[]),
    Block::new(0x1980, 0x19DF, "New_Tai_Lue", &[]),
    Block::new(0x19E0, 0x19FF, "Khmer_Symbols", &[]),
    Block::new(0x1A00, 0x1A1F, "Buginese", &[]),
    Block::new(0x1A20, 0x1AAF, "Tai_Tham", &[]),
    Block::new(0x1AB0, 0x1AFF, "Combining_Diacritical_Marks_Extended", &["Diacriticals_Ext"]),
    Block::new(0x1B00, 0x1B7F, "Balinese", &[]),
    Block::new(0x1B80, 0x1BBF, "Sundanese", &[]),
    Block::new(0x1BC0, 0x1BFF, "Batak", &[]),
    Block::new(0x1C00, 0x1C4F, "Lepcha", &[]),
    Block::new(0x1C50, 0x1C7F, "Ol_Chiki", &[]),
    Block::new(0x1C80, 0x1C8F, "Cyrillic_Extended_C", &["Cyrillic_Ext_C"]),
    Block::new(0x1C90, 0x1CBF, "Georgian_Extended", &["Georgian_Ext"]),
    Block::new(0x1CC0, 0x1CCF, "Sundanese_Supplement", &["Sundanese_Sup"]),
    Block::new(0x1CD0, 0x1CFF, "Vedic_Extensions", &["Vedic_Ext"]),
    Block::new(0x1D00, 0x1D7F, "Phonetic_Extensions", &["Phonetic_Ext"]),
    Block::new(0x1D80, 0x1DBF, "Phonetic_Extensions_Supplement", &["Phonetic_Ext_Sup"]),
    Block::new(0x1DC0, 0x1DFF, "Combining_Diacritical_Marks_Supplement", &["Diacriticals_Sup"]),
    Block::new(0x1E00, 0x1EFF, "Latin_Extended_Additional", &["Latin_Ext_Additional"]),
    Block::new(0x1F00, 0x1FFF, "Greek_Extended", &["Greek_Ext"]),
    Block::new(0x2000, 0x206F, "General_Punctuation", &["Punctuation"]),
    Block::new(0x2070, 0x209F, "Superscripts_And_Subscripts", &["Super_And_Sub"]),
    Block::new(0x20A0, 0x20CF, "Currency_Symbols", &[]),
    Block::new(0x20D0, 0x20FF, "Combining_Diacritical_Marks_For_Symbols", &["Diacriticals_For_Symbols", "Combining_Marks_For_Symbols"]),
    Block::new(0x2100, 0x214F, "Letterlike_Symbols", &[]),
    Block::new(0x2150, 0x218F, "Number_Forms", &[]),
    Block::new(0x2190, 0x21FF, "Arrows", &[]),
    Block::new(0x2200, 0x22FF, "Mathematical_Operators", &["Math_Operators"]),
    Block::new(0x2300, 0x23FF, "Miscellaneous_Technical", &["Misc_Technical"]),
    Block::new(0x2400, 0x243F, "Control_Pictures", &[]),
    Block::new(0x2440, 0x245F, "Optical_Character_Recognition", &["OCR"]),
    Block::new(0x2460, 0x24FF, "Enclosed_Alphanumerics", &["Enclosed_Alphanum"]),
    Block::new(0x2500, 0x257F, "Box_Drawing", &[]),
    Block::new(0x2580, 0x259F, "Block_Elements", &[]),
    Block::new(0x25A0, 0x25FF, "Geometric_Shapes", &[]),
    Block::new(0x2600, 0x26FF, "Miscellaneous_Symbols", &["Misc_Symbols"]),
    Block::new(0x2700, 0x27BF, "Dingbats", &[]),
    Block::new(0x27C0, 0x27EF, "Miscellaneous_Mathematical_Symbols_A", &["Misc_Math_Symbols_A"]),
    Block::new(0x27F0, 0x27FF, "Supplemental_Arrows_A", &["Sup_Arrows_A"]),
    Block::new(0x2800, 0x28FF, "Braille_Patterns", &["Braille"]),
    Block::new(0x2900, 0x297F, "Supplemental_Arrows_B", &["Sup_Arrows_B"]),
    Block::new(0x2980, 0x29FF, "Miscellaneous_Mathematical_Symbols_B", &["Misc_Math_Symbols_B"]),
    Block::new(0x2A00, 0x2AFF, "Supplemental_Mathematical_Operators", &["Sup_Math_Operators"]),
    Block::new(0x2B00, 0x2BFF, "Miscellaneous_Symbols_And_Arrows", &["Misc_Arrows"]),
    Block::new(0x2C00, 0x2C5F, "Glagolitic", &[]),
    Block::new(0x2C60, 0x2C7F, "Latin_Extended_C", &["Latin_Ext_C"]),
    Block::new(0x2C80, 0x2CFF, "Coptic", &[]),
    Block::new(0x2D00, 0x2D2F, "Georgian_Supplement", &["Georgian_Sup"]),
    Block::new(0x2D30, 0x2D7F, "Tifinagh", &[]),
    Block::new(0x2D80, 0x2DDF, "Ethiopic_Extended", &["Ethiopic_Ext"]),
    Block::new(0x2DE0, 0x2DFF, "Cyrillic_Extended_A", &["Cyrillic_Ext_A"]),
    Block::new(0x2E00, 0x2E7F, "Supplemental_Punctuation", &["Sup_Punctuation"]),
    Block::new(0x2E80, 0x2EFF, "CJK_Radicals_Supplement", &["CJK_Radicals_Sup"]),
    Block::new(0x2F00, 0x2FDF, "Kangxi_Radicals", &["Kangxi"]),
    Block::new(0x2FF0, 0x2FFF, "Ideographic_Description_Characters", &["IDC"]),
    Block::new(0x3000, 0x303F, "CJK_Symbols_And_Punctuation", &["CJK_Symbols"]),
    Block::new(0x3040, 0x309F, "Hiragana", &[]),
    Block::new(0x30A0, 0x30FF, "Katakana", &[]),
    Block::new(0x3100, 0x312F, "Bopomofo", &[]),
    Block::new(0x3130, 0x318F, "Hangul_Compatibility_Jamo", &["Compat_Jamo"]),
    Block::new(0x3190, 0x319F, "Kanbun", &[]),
    Block::new(0x31A0, 0x31BF, "Bopomofo_Extended", &["Bopomofo_Ext"]),
    Block::new(0x31C0, 0x31EF, "CJK_Strokes", &[]),
    Block::new(0x31F0, 0x31FF, "Katakana_Phonetic_Extensions", &["Katakana_Ext"]),
    Block::new(0x3200, 0x32FF, "Enclosed_CJK_Letters_And_Months", &["Enclosed_CJK"]),
    Block::new(0x3300, 0x33FF, "CJK_Compatibility", &["CJK_Compat"]),
    Block::new(0x3400, 0x4DBF, "CJK_Unified_Ideographs_Extension_A", &["CJK_Ext_A"]),
    Block::new(0x4DC0, 0x4DFF, "Yijing_Hexagram_Symbols", &["Yijing"]),
    Block::new(0x4E00, 0x9FFF, "CJK_Unified_Ideographs", &["CJK"]),
    Block::new(0xA000, 0xA48F, "Yi_Syllables", &[]),
    Block::new(0xA490, 0xA4CF, "Yi_Radicals", &[]),
    Block::new(0xA4D0, 0xA4FF, "Lisu", &[]),
    Block::new(0xA500, 0xA63F, "Vai", &[]),
    Block::new(0xA640, 0xA69F, "Cyrillic_Extended_B", &["Cyrillic_Ext_B"]),
    Block::new(0xA6A0, 0xA6FF, "Bamum", &[]),
    Block::new(0xA700, 0xA71F, "Modifier_Tone_Letters", &[]),
    Block::new(0xA720, 0xA7FF, "Latin_Extended_D", &["Latin_Ext_D"]),
    Block::new(0xA800, 0xA82F, "Syloti_Nagri", &[]),
    Block::new(0xA830, 0xA83F, "Common_Indic_Number_Forms", &["Indic_Number_Forms"]),
    Block::new(0xA840, 0xA87F, "Phags_Pa", &[]),
    Block::new(0xA880, 0xA8DF, "Saurashtra", &[]),
    Block::new(0xA8E0, 0xA8FF, "Devanagari_Extended", &["Devanagari_Ext"]),
    Block::new(0xA900, 0xA92F, "Kayah_Li", &[]),
    Block::new(0xA930, 0xA95F, "Rejang", &[]),
    Block::new(0xA960, 0xA97F, "Hangul_Jamo_Extended_A", &["Jamo_Ext_A"]),
    Block::new(0xA980, 0xA9DF, "Javanese", &[]),
    Block::new(0xA9E0, 0xA9FF, "Myanmar_Extended_B", &["Myanmar_Ext_B"]),
    Block::new(0xAA00, 0xAA5F, "Cham", &[]),
    Block::new(0xAA60, 0xAA7F, "Myanmar_Extended_A", &["Myanmar_Ext_A"]),
    Block::new(0xAA80, 0xAADF, "Tai_Viet", &[]),
    Block::new(0xAAE0, 0xAAFF, "Meetei_Mayek_Extensions", &["Meetei_Mayek_Ext"]),
    Block::new(0xAB00, 0xAB2F, "Ethiopic_Extended_A", &["Ethiopic_Ext_A"]),
    Block::new(0xAB30, 0xAB6F, "Latin_Extended_E", &["Latin_Ext_E"]),
    Block::new(0xAB70, 0xABBF, "Cherokee_Supplement", &["Cherokee_Sup"]),
    Block::new(0xABC0, 0xABFF, "Meetei_Mayek", &[]),
    Block::new(0xAC00, 0xD7AF, "Hangul_Syllables", &["Hangul"]),
    Block::new(0xD7B0, 0xD7FF, "Hangul_Jamo_Extended_B", &["Jamo_Ext_B"]),
    Block::new(0xD800, 0xDB7F, "High_Surrogates", &[]),
    Block::new(0xDB80, 0xDBFF, "High_Private_Use_Surrogates", &["High_PU_Surrogates"]),
    Block::new(0xDC00, 0xDFFF, "Low_Surrogates", &[]),
    Block::new(0xE000, 0xF8FF, "Private_Use_Area", &["PUA", "Private_Use"]),
    Block::new(0xF900, 0xFAFF, "CJK_Compatibility_Ideographs", &["CJK_Compat_Ideographs"]),
    Block::new(0xFB00, 0xFB4F, "Alphabetic_Presentation_Forms", &["Alphabetic_PF"]),
    Block::new(0xFB50, 0xFDFF, "Arabic_Presentation_Forms_A", &["Arabic_PF_A"]),
    Block::new(0xFE00, 0xFE0F, "Variation_Selectors", &["VS"]),
    Block::new(0xFE10, 0xFE1F, "Vertical_Forms", &[]),
    Block::new(0xFE20, 0xFE2F, "Combining_Half_Marks", &["Half_Marks"]),
    Block::new(0xFE30, 0xFE4F, "CJK_Compatibility_Forms", &["CJK_Compat_Forms"]),
    Block::new(0xFE50, 0xFE6F, "Small_Form_Variants", &["Small_Forms"]),
    Block::new(0xFE70, 0xFEFF, "Arabic_Presentation_Forms_B", &["Arabic_PF_B"]),
    Block::new(0xFF00, 0xFFEF, "Halfwidth_And_Fullwidth_Forms", &["Half_And_Full_Forms"]),
    Block::new(0xFFF0, 0xFFFF, "Specials", &[]),
    Block::new(0x10000, 0x1007F, "Linear_B_Syllabary", &[]),
    Block::new(0x10080, 0x100FF, "Linear_B_Ideograms", &[]),
    Block::new(0x10100, 0x1013F, "Aegean_Numbers", &[]),
    Block::new(0x10140, 0x1018F, "Ancient_Greek_Numbers", &[]),
    Block::new(0x10190, 0x101CF, "Ancient_Symbols", &[]),
    Block::new(0x101D0, 0x101FF, "Phaistos_Disc", &["Phaistos"]),
    Block::new(0x10280, 0x1029F, "Lycian", &[]),
    Block::new(0x102A0, 0x102DF, "Carian", &[]),
    Block::new(0x102E0, 0x102FF, "Coptic_Epact_Numbers", &[]),
    Block::new(0x10300, 0x1032F, "Old_Italic", &[]),
    Block::new(0x10330, 0x1034F, "Gothic", &[]),
    Block::new(0x10350, 0x1037F, "Old_Permic", &[]),
    Block::new(0x10380, 0x1039F, "Ugaritic", &[]),
    Block::new(0x103A0, 0x103DF, "Old_Persian", &[]),
    Block::new(0x10400, 0x1044F, "Deseret", &[]),
    Block::new(0x10450, 0x1047F, "Shavian", &[]),
    Block::new(0x10480, 0x104AF, "Osmanya", &[]),
    Block::new(0x104B0, 0x104FF, "Osage", &[]),
    Block::new(0x10500, 0x1052F, "Elbasan", &[]),
    Block::new(0x10530, 0x1056F, "Caucasian_Albanian", &[]),
    Block::new(0x10570, 0x105BF, "Vithkuqi", &[]),
    Block::new(0x10600, 0x1077F, "Linear_A", &[]),
    Block::new(0x10780, 0x107BF, "Latin_Extended_F", &["Latin_Ext_F"]),
    Block::new(0x10800, 0x1083F, "Cypriot_Syllabary", &[]),
    Block::new(0x10840, 0x1085F, "Imperial_Aramaic", &[]),
    Block::new(0x10860, 0x1087F, "Palmyrene", &[]),
    Block::new(0x10880, 0x108AF, "Nabataean", &[]),
    Block::new(0x108E0, 0x108FF, "Hatran", &[]),
    Block::new(0x10900, 0x1091F, "Phoenician", &[]),
    Block::new(0x10920, 0x1093F, "Lydian", &[]),
    Block::new(0x10980, 0x1099F, "Meroitic_Hieroglyphs", &[]),
    Block::new(0x109A0, 0x109FF, "Meroitic_Cursive", &[]),
    Block::new(0x10A00, 0x10A5F, "Kharoshthi", &[]),
    Block::new(0x10A60, 0x10A7F, "Old_South_Arabian", &[]),
    Block::new(0x10A80, 0x10A9F, "Old_North_Arabian", &[]),
    Block::new(0x10AC0, 0x10AFF, "Manichaean", &[]),
    Block::new(0x10B00, 0x10B3F, "Avestan", &[]),
    Block::new(0x10B40, 0x10B5F, "Inscriptional_Parthian", &[]),
    Block::new(0x10B60, 0x10B7F, "Inscriptional_Pahlavi", &[]),
    Block::new(0x10B80, 0x10BAF, "Psalter_Pahlavi", &[]),
    Block::new(0x10C00, 0x10C4F, "Old_Turkic", &[]),
    Block::new(0x10C80, 0x10CFF, "Old_Hungarian", &[]),
    Block::new(0x10D00, 0x10D3F, "Hanifi_Rohingya", &[]),
    Block::new(0x10E60, 0x10E7F, "Rumi_Numeral_Symbols", &["Rumi"]),
    Block::new(0x10E80, 0x10EBF, "Yezidi", &[]),
    Block::new(0x10F00, 0x10F2F, "Old_Sogdian", &[]),
    Block::new(0x10F30, 0x10F6F, "Sogdian", &[]),
    Block::new(0x10F70, 0x10FAF, "Old_Uyghur", &[]),
    Block::new(0x10FB0, 0x10FDF, "Chorasmian", &[]),
    Block::new(0x10FE0, 0x10FFF, "Elymaic", &[]),
    Block::new(0x11000, 0x1107F, "Brahmi", &[]),
    Block::new(0x11080, 0x110CF, "Kaithi", &[]),
    Block::new(0x110D0, 0x110FF, "Sora_Sompeng", &[]),
    Block::new(0x11100, 0x1114F, "Chakma", &[]),
    Block::new(0x11150, 0x1117F, "Mahajani", &[]),
    Block::new(0x11180, 0x111DF, "Sharada", &[]),
    Block::new(0x111E0, 0x111FF, "Sinhala_Archaic_Numbers", &[]),
    Block::new(0x11200, 0x1124F, "Khojki", &[]),
    Block::new(0x11280, 0x112AF, "Multani", &[]),
    Block::new(0x112B0, 0x112FF, "Khudawadi", &[]),
    Block::new(0x11300, 0x1137F, "Grantha", &[]),
    Block::new(0x11400, 0x1147F, "Newa", &[]),
    Block::new(0x11480, 0x114DF, "Tirhuta", &[]),
    Block::new(0x11580, 0x115FF, "Siddham", &[]),
    Block::new(0x11600, 0x1165F, "Modi", &[]),
    Block::new(0x11660, 0x1167F, "Mongolian_Supplement", &["Mongolian_Sup"]),
    Block::new(0x11680, 0x116CF, "Takri", &[]),
    Block::new(0x11700, 0x1174F, "Ahom", &[]),
    Block::new(0x11800, 0x1184F, "Dogra", &[]),
    Block::new(0x118A0, 0x118FF, "Warang_Citi", &[]),
    Block::new(0x11900, 0x1195F, "Dives_Akuru", &[]),
    Block::new(0x119A0, 0x119FF, "Nandinagari", &[]),
    Block::new(0x11A00, 0x11A4F, "Zanabazar_Square", &[]),
    Block::new(0x11A50, 0x11AAF, "Soyombo", &[]),
    Block::new(0x11AB0, 0x11ABF, "Unified_Canadian_Aboriginal_Syllabics_Extended_A", &["UCAS_Ext_A"]),
    Block::new(0x11AC0, 0x11AFF, "Pau_Cin_Hau", &[]),
    Block::new(0x11C00, 0x11C6F, "Bhaiksuki", &[]),
    Block::new(0x11C70, 0x11CBF, "Marchen", &[]),
    Block::new(0x11D00, 0x11D5F, "Masaram_Gondi", &[]),
    Block::new(0x11D60, 0x11DAF, "Gunjala_Gondi", &[]),
    Block::new(0x11EE0, 0x11EFF, "Makasar", &[]),
    Block::new(0x11FB0, 0x11FBF, "Lisu_Supplement", &["Lisu_Sup"]),
    Block::new(0x11FC0, 0x11FFF, "Tamil_Supplement", &["Tamil_Sup"]),
    Block::new(0x12000, 0x123FF, "Cuneiform", &[]),
    Block::new(0x12400, 0x1247F, "Cuneiform_Numbers_And_Punctuation", &["Cuneiform_Numbers"]),
    Block::new(0x12480, 0x1254F, "Early_Dynastic_Cuneiform", &[]),
    Block::new(0x12F90, 0x12FFF, "Cypro_Minoan", &[]),
    Block::new(0x13000, 0x1342F, "Egyptian_Hieroglyphs", &[]),
    Block::new(0x13430, 0x1343F, "Egyptian_Hieroglyph_Format_Controls", &[]),
    Block::new(0x14400, 0x1467F, "Anatolian_Hieroglyphs", &[]),
    Block::new(0x16800, 0x16A3F, "Bamum_Supplement", &["Bamum_Sup"]),
    Block::new(0x16A40, 0x16A6F, "Mro", &[]),
    Block::new(0x16A70, 0x16ACF, "Tangsa", &[]),
    Block::new(0x16AD0, 0x16AFF, "Bassa_Vah", &[]),
    Block::new(0x16B00, 0x16B8F, "Pahawh_Hmong", &[]),
    Block::new(0x16E40, 0x16E9F, "Medefaidrin", &[]),
    Block::new(0x16F00, 0x16F9F, "Miao", &[]),
    Block::new(0x16FE0, 0x16FFF, "Ideographic_Symbols_And_Punctuation", &["Ideographic_Symbols"]),
    Block::new(0x17000, 0x187FF, "Tangut", &[]),
    Block::new(0x18800, 0x18AFF, "Tangut_Components", &[]),
    Block::new(0x18B00, 0x18CFF, "Khitan_Small_Script", &[]),
    Block::new(0x18D00, 0x18D7F, "Tangut_Supplement", &["Tangut_Sup"]),
    Block::new(0x1AFF0, 0x1AFFF, "Kana_Extended_B", &["Kana_Ext_B"]),
    Block::new(0x1B000, 0x1B0FF, "Kana_Supplement", &["Kana_Sup"]),
    Block::new(0x1B100, 0x1B12F, "Kana_Extended_A", &["Kana_Ext_A"]),
    Block::new(0x1B130, 0x1B16F, "Small_Kana_Extension", &["Small_Kana_Ext"]),
    Block::new(0x1B170, 0x1B2FF, "Nushu", &[]),
    Block::new(0x1BC00, 0x1BC9F, "Duployan", &[]),
    Block::new(0x1BCA0, 0x1BCAF, "Shorthand_Format_Controls", &[]),
    Block::new(0x1CF00, 0x1CFCF, "Znamenny_Musical_Notation", &["Znamenny_Music"]),
    Block::new(0x1D000, 0x1D0FF, "Byzantine_Musical_Symbols", &["Byzantine_Music"]),
    Block::new(0x1D100, 0x1D1FF, "Musical_Symbols", &["Music"]),
    Block::new(0x1D200, 0x1D24F, "Ancient_Greek_Musical_Notation", &["Ancient_Greek_Music"]),
    Block::new(0x1D2E0, 0x1D2FF, "Mayan_Numerals", &[]),
    Block::new(0x1D300, 0x1D35F, "Tai_Xuan_Jing_Symbols", &["Tai_Xuan_Jing"]),
    Block::new(0x1D360, 0x1D37F, "Counting_Rod_Numerals", &["Counting_Rod"]),
    Block::new(0x1D400, 0x1D7FF, "Mathematical_Alphanumeric_Symbols", &["Math_Alphanum"]),
    Block::new(0x1D800, 0x1DAAF, "Sutton_SignWriting", &[]),
    Block::new(0x1DF00, 0x1DFFF, "Latin_Extended_G", &["Latin_Ext_G"]),
    Block::new(0x1E000, 0x1E02F, "Glagolitic_Supplement", &["Glagolitic_Sup"]),
    Block::new(0x1E100, 0x1E14F, "Nyiakeng_Puachue_Hmong", &[]),
    Block::new(0x1E290, 0x1E2BF, "Toto", &[]),
    Block::new(0x1E2C0, 0x1E2FF, "Wancho", &[]),
    Block::new(0x1E7E0, 0x1E7FF, "Ethiopic_Extended_B", &["Ethiopic_Ext_B"]),
    Block::new(0x1E800, 0x1E8DF, "Mende_Kikakui", &[]),
    Block::new(0x1E900, 0x1E95F, "Adlam", &[]),
    Block::new(0x1EC70, 0x1ECBF, "Indic_Siyaq_Numbers", &[]),
    Block::new(0x1ED00, 0x1ED4F, "Ottoman_Siyaq_Numbers", &[]),
    Block::new(0x1EE00, 0x1EEFF, "Arabic_Mathematical_Alphabetic_Symbols", &["Arabic_Math"]),
    Block::new(0x1F000, 0x1F02F, "Mahjong_Tiles", &["Mahjong"]),
    Block::new(0x1F030, 0x1F09F, "Domino_Tiles", &["Domino"]),
    Block::new(0x1F0A0, 0x1F0FF, "Playing_Cards", &[]),
    Block::new(0x1F100, 0x1F1FF, "Enclosed_Alphanumeric_Supplement", &["Enclosed_Alphanum_Sup"]),
    Block::new(0x1F200, 0x1F2FF, "Enclosed_Ideographic_Supplement", &["Enclosed_Ideographic_Sup"]),
    Block::new(0x1F300, 0x1F5FF, "Miscellaneous_Symbols_And_Pictographs", &["Misc_Pictographs"]),
    Block::new(0x1F600, 0x1F64F, "Emoticons", &[]),
    Block::new(0x1F650, 0x1F67F, "Ornamental_Dingbats", &[]),
    Block::new(0x1F680, 0x1F6FF, "Transport_And_Map_Symbols", &["Transport_And_Map"]),
    Block::new(0x1F700, 0x1F77F, "Alchemical_Symbols", &["Alchemical"]),
    Block::new(0x1F780, 0x1F7FF, "Geometric_Shapes_Extended", &["Geometric_Shapes_Ext"]),
    Block::new(0x1F800, 0x1F8FF, "Supplemental_Arrows_C", &["Sup_Arrows_C"]),
    Block::new(0x1F900, 0x1F9FF, "Supplemental_Symbols_And_Pictographs", &["Sup_Symbols_And_Pictographs"]),
    Block::new(0x1FA00, 0x1FA6F, "Chess_Symbols", &[]),
    Block::new(0x1FA70, 0x1FAFF, "Symbols_And_Pictographs_Extended_A", &["Symbols_And_Pictographs_Ext_A"]),
    Block::new(0x1FB00, 0x1FBFF, "Symbols_For_Legacy_Computing", &[]),
    Block::new(0x20000, 0x2A6DF, "CJK_Unified_Ideographs_Extension_B", &["CJK_Ext_B"]),
    Block::new(0x2A700, 0x2B73F, "CJK_Unified_Ideographs_Extension_C", &["CJK_Ext_C"]),
    Block::new(0x2B740, 0x2B81F, "CJK_Unified_Ideographs_Extension_D", &["CJK_Ext_D"]),
    Block::new(0x2B820, 0x2CEAF, "CJK_Unified_Ideographs_Extension_E", &["CJK_Ext_E"]),
    Block::new(0x2CEB0, 0x2EBEF, "CJK_Unified_Ideographs_Extension_F", &["CJK_Ext_F"]),
    Block::new(0x2F800, 0x2FA1F, "CJK_Compatibility_Ideographs_Supplement", &["CJK_Compat_Ideographs_Sup"]),
    Block::new(0x30000, 0x3134F, "CJK_Unified_Ideographs_Extension_G", &["CJK_Ext_G"]),
    Block::new(0xE0000, 0xE007F, "Tags", &[]),
    Block::new(0xE0100, 0xE01EF, "Variation_Selectors_Supplement", &["VS_Sup"]),
    Block::new(0xF0000, 0xFFFFF, "Supplementary_Private_Use_Area_A", &["Sup_PUA_A"]),
    Block::new(0x100000, 0x10FFFF, "Supplementary_Private_Use_Area_B", &["Sup_PUA_B"]),
];
