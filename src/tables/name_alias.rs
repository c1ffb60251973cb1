// Generated from https://www.unicode.org/Public/14.0.0/ucd/NameAliases.txt
// Do not edit by hand.

use crate::name_alias::NameAliases;

// (code point, NameAliases { corrections, controls, alternates, figments, abbreviations })
pub const NAME_ALIASES: &[(u32, NameAliases)] = &[
    (0x0000, NameAliases::new(&[], &["NULL"], &[], &[], &["NUL"])),
    (0x0001, NameAliases::new(&[], &["START OF HEADING"], &[], &[], &["SOH"])),
    (0x0002, NameAliases::new(&[], &["START OF TEXT"], &[], &[], &["STX"])),
    (0x0003, NameAliases::new(&[], &["END OF TEXT"], &[], &[], &["ETX"])),
    (0x0004, NameAliases::new(&[], &["END OF TRANSMISSION"], &[], &[], &["EOT"])),
    (0x0005, NameAliases::new(&[], &["ENQUIRY"], &[], &[], &["ENQ"])),
    (0x0006, NameAliases::new(&[], &["ACKNOWLEDGE"], &[], &[], &["ACK"])),
    (0x0007, NameAliases::new(&[], &["ALERT"], &[], &[], &["BEL"])),
    (0x0008, NameAliases::new(&[], &["BACKSPACE"], &[], &[], &["BS"])),
    (0x0009, NameAliases::new(&[], &["CHARACTER TABULATION", "HORIZONTAL TABULATION"], &[], &[], &["HT", "TAB"])),
    (0x000A, NameAliases::new(&[], &["LINE FEED", "NEW LINE", "END OF LINE"], &[], &[], &["LF", "NL", "EOL"])),
    (0x000B, NameAliases::new(&[], &["LINE TABULATION", "VERTICAL TABULATION"], &[], &[], &["VT"])),
    (0x000C, NameAliases::new(&[], &["FORM FEED"], &[], &[], &["FF"])),
    (0x000D, NameAliases::new(&[], &["CARRIAGE RETURN"], &[], &[], &["CR"])),
    (0x000E, NameAliases::new(&[], &["SHIFT OUT", "LOCKING-SHIFT ONE"], &[], &[], &["SO"])),
    (0x000F, NameAliases::new(&[], &["SHIFT IN", "LOCKING-SHIFT ZERO"], &[], &[], &["SI"])),
    (0x0010, NameAliases::new(&[], &["DATA LINK ESCAPE"], &[], &[], &["DLE"])),
    (0x0011, NameAliases::new(&[], &["DEVICE CONTROL ONE"], &[], &[], &["DC1"])),
    (0x0012, NameAliases::new(&[], &["DEVICE CONTROL TWO"], &[], &[], &["DC2"])),
    (0x0013, NameAliases::new(&[], &["DEVICE CONTROL THREE"], &[], &[], &["DC3"])),
    (0x0014, NameAliases::new(&[], &["DEVICE CONTROL FOUR"], &[], &[], &["DC4"])),
    (0x0015, NameAliases::new(&[], &["NEGATIVE ACKNOWLEDGE"], &[], &[], &["NAK"])),
    (0x0016, NameAliases::new(&[], &["SYNCHRONOUS IDLE"], &[], &[], &["SYN"])),
    (0x0017, NameAliases::new(&[], &["END OF TRANSMISSION BLOCK"], &[], &[], &["ETB"])),
    (0x0018, NameAliases::new(&[], &["CANCEL"], &[], &[], &["CAN"])),
    (0x0019, NameAliases::new(&[], &["END OF MEDIUM"], &[], &[], &["EOM"])),
    (0x001A, NameAliases::new(&[], &["SUBSTITUTE"], &[], &[], &["SUB"])),
    (0x001B, NameAliases::new(&[], &["ESCAPE"], &[], &[], &["ESC"])),
    (0x001C, NameAliases::new(&[], &["INFORMATION SEPARATOR FOUR", "FILE SEPARATOR"], &[], &[], &["FS"])),
    (0x001D, NameAliases::new(&[], &["INFORMATION SEPARATOR THREE", "GROUP SEPARATOR"], &[], &[], &["GS"])),
    (0x001E, NameAliases::new(&[], &["INFORMATION SEPARATOR TWO", "RECORD SEPARATOR"], &[], &[], &["RS"])),
    (0x001F, NameAliases::new(&[], &["INFORMATION SEPARATOR ONE", "UNIT SEPARATOR"], &[], &[], &["US"])),
    (0x0020, NameAliases::new(&[], &[], &[], &[], &["SP"])),
    (0x007F, NameAliases::new(&[], &["DELETE"], &[], &[], &["DEL"])),
    (0x0080, NameAliases::new(&[], &[], &[], &["PADDING CHARACTER"], &["PAD"])),
    (0x0081, NameAliases::new(&[], &[], &[], &["HIGH OCTET PRESET"], &["HOP"])),
    (0x0082, NameAliases::new(&[], &["BREAK PERMITTED HERE"], &[], &[], &["BPH"])),
    (0x0083, NameAliases::new(&[], &["NO BREAK HERE"], &[], &[], &["NBH"])),
    (0x0084, NameAliases::new(&[], &["INDEX"], &[], &[], &["IND"])),
    (0x0085, NameAliases::new(&[], &["NEXT LINE"], &[], &[], &["NEL"])),
    (0x0086, NameAliases::new(&[], &["START OF SELECTED AREA"], &[], &[], &["SSA"])),
    (0x0087, NameAliases::new(&[], &["END OF SELECTED AREA"], &[], &[], &["ESA"])),
    (0x0088, NameAliases::new(&[], &["CHARACTER TABULATION SET", "HORIZONTAL TABULATION SET"], &[], &[], &["HTS"])),
    (0x0089, NameAliases::new(&[], &["CHARACTER TABULATION WITH JUSTIFICATION", "HORIZONTAL TABULATION WITH JUSTIFICATION"], &[], &[], &["HTJ"])),
    (0x008A, NameAliases::new(&[], &["LINE TABULATION SET", "VERTICAL TABULATION SET"], &[], &[], &["VTS"])),
    (0x008B, NameAliases::new(&[], &["PARTIAL LINE FORWARD", "PARTIAL LINE DOWN"], &[], &[], &["PLD"])),
    (0x008C, NameAliases::new(&[], &["PARTIAL LINE BACKWARD", "PARTIAL LINE UP"], &[], &[], &["PLU"])),
    (0x008D, NameAliases::new(&[], &["REVERSE LINE FEED", "REVERSE INDEX"], &[], &[], &["RI"])),
    (0x008E, NameAliases::new(&[], &["SINGLE SHIFT TWO", "SINGLE-SHIFT-2"], &[], &[], &["SS2"])),
    (0x008F, NameAliases::new(&[], &["SINGLE SHIFT THREE", "SINGLE-SHIFT-3"], &[], &[], &["SS3"])),
    (0x0090, NameAliases::new(&[], &["DEVICE CONTROL STRING"], &[], &[], &["DCS"])),
    (0x0091, NameAliases::new(&[], &["PRIVATE USE ONE", "PRIVATE USE-1"], &[], &[], &["PU1"])),
    (0x0092, NameAliases::new(&[], &["PRIVATE USE TWO", "PRIVATE USE-2"], &[], &[], &["PU2"])),
    (0x0093, NameAliases::new(&[], &["SET TRANSMIT STATE"], &[], &[], &["STS"])),
    (0x0094, NameAliases::new(&[], &["CANCEL CHARACTER"], &[], &[], &["CCH"])),
    (0x0095, NameAliases::new(&[], &["MESSAGE WAITING"], &[], &[], &["MW"])),
    (0x0096, NameAliases::new(&[], &["START OF GUARDED AREA", "START OF PROTECTED AREA"], &[], &[], &["SPA"])),
    (0x0097, NameAliases::new(&[], &["END OF GUARDED AREA", "END OF PROTECTED AREA"], &[], &[], &["EPA"])),
    (0x0098, NameAliases::new(&[], &["START OF STRING"], &[], &[], &["SOS"])),
    (0x0099, NameAliases::new(&[], &[], &[], &["SINGLE GRAPHIC CHARACTER INTRODUCER"], &["SGC"])),
    (0x009A, NameAliases::new(&[], &["SINGLE CHARACTER INTRODUCER"], &[], &[], &["SCI"])),
    (0x009B, NameAliases::new(&[], &["CONTROL SEQUENCE INTRODUCER"], &[], &[], &["CSI"])),
    (0x009C, NameAliases::new(&[], &["STRING TERMINATOR"], &[], &[], &["ST"])),
    (0x009D, NameAliases::new(&[], &["OPERATING SYSTEM COMMAND"], &[], &[], &["OSC"])),
    (0x009E, NameAliases::new(&[], &["PRIVACY MESSAGE"], &[], &[], &["PM"])),
    (0x009F, NameAliases::new(&[], &["APPLICATION PROGRAM COMMAND"], &[], &[], &["APC"])),
    (0x00A0, NameAliases::new(&[], &[], &[], &[], &["NBSP"])),
    (0x00AD, NameAliases::new(&[], &[], &[], &[], &["SHY"])),
    (0x01A2, NameAliases::new(&["LATIN CAPITAL LETTER GHA"], &[], &[], &[], &[])),
    (0x01A3, NameAliases::new(&["LATIN SMALL LETTER GHA"], &[], &[], &[], &[])),
    (0x034F, NameAliases::new(&[], &[], &[], &[], &["CGJ"])),
    (0x061C, NameAliases::new(&[], &[], &[], &[], &["ALM"])),
    (0x0709, NameAliases::new(&["SYRIAC SUBLINEAR COLON SKEWED LEFT"], &[], &[], &[], &[])),
    (0x0CDE, NameAliases::new(&["KANNADA LETTER LLLA"], &[], &[], &[], &[])),
    (0x0E9D, NameAliases::new(&["LAO LETTER FO FON"], &[], &[], &[], &[])),
    (0x0E9F, NameAliases::new(&["LAO LETTER FO FAY"], &[], &[], &[], &[])),
    (0x0EA3, NameAliases::new(&["LAO LETTER RO"], &[], &[], &[], &[])),
    (0x0EA5, NameAliases::new(&["LAO LETTER LO"], &[], &[], &[], &[])),
    (0x0FD0, NameAliases::new(&["TIBETAN MARK BKA- SHOG GI MGO RGYAN"], &[], &[], &[], &[])),
    (0x11EC, NameAliases::new(&["HANGUL JONGSEONG YESIEUNG-KIYEOK"], &[], &[], &[], &[])),
    (0x11ED, NameAliases::new(&["HANGUL JONGSEONG YESIEUNG-SSANGKIYEOK"], &[], &[], &[], &[])),
    (0x11EE, NameAliases::new(&["HANGUL JONGSEONG SSANGYESIEUNG"], &[], &[], &[], &[])),
    (0x11EF, NameAliases::new(&["HANGUL JONGSEONG YESIEUNG-KHIEUKH"], &[], &[], &[], &[])),
    (0x180B, NameAliases::new(&[], &[], &[], &[], &["FVS1"])),
    (0x180C, NameAliases::new(&[], &[], &[], &[], &["FVS2"])),
    (0x180D, NameAliases::new(&[], &[], &[], &[], &["FVS3"])),
    (0x180E, NameAliases::new(&[], &[], &[], &[], &["MVS"])),
    (0x180F, NameAliases::new(&[], &[], &[], &[], &["FVS4"])),
    (0x200B, NameAliases::new(&[], &[], &[], &[], &["ZWSP"])),
    (0x200C, NameAliases::new(&[], &[], &[], &[], &["ZWNJ"])),
    (0x200D, NameAliases::new(&[], &[], &[], &[], &["ZWJ"])),
    (0x200E, NameAliases::new(&[], &[], &[], &[], &["LRM"])),
    (0x200F, NameAliases::new(&[], &[], &[], &[], &["RLM"])),
    (0x202A, NameAliases::new(&[], &[], &[], &[], &["LRE"])),
    (0x202B, NameAliases::new(&[], &[], &[], &[], &["RLE"])),
    (0x202C, NameAliases::new(&[], &[], &[], &[], &["PDF"])),
    (0x202D, NameAliases::new(&[], &[], &[], &[], &["LRO"])),
    (0x202E, NameAliases::new(&[], &[], &[], &[], &["RLO"])),
    (0x202F, NameAliases::new(&[], &[], &[], &[], &["NNBSP"])),
    (0x205F, NameAliases::new(&[], &[], &[], &[], &["MMSP"])),
    (0x2060, NameAliases::new(&[], &[], &[], &[], &["WJ"])),
    (0x2066, NameAliases::new(&[], &[], &[], &[], &["LRI"])),
    (0x2067, NameAliases::new(&[], &[], &[], &[], &["RLI"])),
    (0x2068, NameAliases::new(&[], &[], &[], &[], &["FSI"])),
    (0x2069, NameAliases::new(&[], &[], &[], &[], &["PDI"])),
    (0x2118, NameAliases::new(&["WEIERSTRASS ELLIPTIC FUNCTION"], &[], &[], &[], &[])),
    (0x2448, NameAliases::new(&["MICR ON US SYMBOL"], &[], &[], &[], &[])),
    (0x2449, NameAliases::new(&["MICR DASH SYMBOL"], &[], &[], &[], &[])),
    (0x2B7A, NameAliases::new(&["LEFTWARDS TRIANGLE-HEADED ARROW WITH DOUBLE VERTICAL STROKE"], &[], &[], &[], &[])),
    (0x2B7C, NameAliases::new(&["RIGHTWARDS TRIANGLE-HEADED ARROW WITH DOUBLE VERTICAL STROKE"], &[], &[], &[], &[])),
    (0xA015, NameAliases::new(&["YI SYLLABLE ITERATION MARK"], &[], &[], &[], &[])),
    (0xAA6E, NameAliases::new(&["MYANMAR LETTER KHAMTI LLA"], &[], &[], &[], &[])),
    (0xFE00, NameAliases::new(&[], &[], &[], &[], &["VS1"])),
    (0xFE01, NameAliases::new(&[], &[], &[], &[], &["VS2"])),
    (0xFE02, NameAliases::new(&[], &[], &[], &[], &["VS3"])),
    (0xFE03, NameAliases::new(&[], &[], &[], &[], &["VS4"])),
    (0xFE04, NameAliases::new(&[], &[], &[], &[], &["VS5"])),
    (0xFE05, NameAliases::new(&[], &[], &[], &[], &["VS6"])),
    (0xFE06, NameAliases::new(&[], &[], &[], &[], &["VS7"])),
    (0xFE07, NameAliases::new(&[], &[], &[], &[], &["VS8"])),
    (0xFE08, NameAliases::new(&[], &[], &[], &[], &["VS9"])),
    (0xFE09, NameAliases::new(&[], &[], &[], &[], &["VS10"])),
    (0xFE0A, NameAliases::new(&[], &[], &[], &[], &["VS11"])),
    (0xFE0B, NameAliases::new(&[], &[], &[], &[], &["VS12"])),
    (0xFE0C, NameAliases::new(&[], &[], &[], &[], &["VS13"])),
    (0xFE0D, NameAliases::new(&[], &[], &[], &[], &["VS14"])),
    (0xFE0E, NameAliases::new(&[], &[], &[], &[], &["VS15"])),
    (0xFE0F, NameAliases::new(&[], &[], &[], &[], &["VS16"])),
    (0xFE18, NameAliases::new(&["PRESENTATION FORM FOR VERTICAL RIGHT WHITE LENTICULAR BRACKET"], &[], &[], &[], &[])),
    (0xFEFF, NameAliases::new(&[], &[], &["BYTE ORDER MARK"], &[], &["BOM", "ZWNBSP"])),
    (0x122D4, NameAliases::new(&["CUNEIFORM SIGN NU11 TENU"], &[], &[], &[], &[])),
    (0x122D5, NameAliases::new(&["CUNEIFORM SIGN NU11 OVER NU11 BUR OVER BUR"], &[], &[], &[], &[])),
    (0x16E56, NameAliases::new(&["MEDEFAIDRIN CAPITAL LETTER H"], &[], &[], &[], &[])),
    (0x16E57, NameAliases::new(&["MEDEFAIDRIN CAPITAL LETTER NG"], &[], &[], &[], &[])),
    (0x16E76, NameAliases::new(&["MEDEFAIDRIN SMALL LETTER H"], &[], &[], &[], &[])),
    (0x16E77, NameAliases::new(&["MEDEFAIDRIN SMALL LETTER NG"], &[], &[], &[], &[])),
    (0x1B001, NameAliases::new(&["HENTAIGANA LETTER E-1"], &[], &[], &[], &[])),
    (0x1D0C5, NameAliases::new(&["BYZANTINE MUSICAL SYMBOL FTHORA SKLIRON CHROMA VASIS"], &[], &[], &[], &[])),
    (0xE0100, NameAliases::new(&[], &[], &[], &[], &["VS17"])),
    (0xE0101, NameAliases::new(&[], &[], &[], &[], &["VS18"])),
    (0xE0102, NameAliases::new(&[], &[], &[], &[], &["VS19"])),
    (0xE0103, NameAliases::new(&[], &[], &[], &[], &["VS20"])),
    (0xE0104, NameAliases::new(&[], &[], &[], &[], &["VS21"])),
    (0xE0105, NameAliases::new(&[], &[], &[], &[], &["VS22"])),
    (0xE0106, NameAliases::new(&[], &[], &[], &[], &["VS23"])),
    (0xE0107, NameAliases::new(&[], &[], &[], &[], &["VS24"])),
    (0xE0108, NameAliases::new(&[], &[], &[], &[], &["VS25"])),
    (0xE0109, NameAliases::new(&[], &[], &[], &[], &["VS26"])),
    (0xE010A, NameAliases::new(&[], &[], &[], &[], &["VS27"])),
    (0xE010B, NameAliases::new(&[], &[], &[], &[], &["VS28"])),
    (0xE010C, NameAliases::new(&[], &[], &[], &[], &["VS29"])),
    (0xE010D, NameAliases::new(&[], &[], &[], &[], &["VS30"])),
    (0xE010E, NameAliases::new(&[], &[], &[], &[], &["VS31"])),
    (0xE010F, NameAliases::new(&[], &[], &[], &[], &["VS32"])),
    (0xE0110, NameAliases::new(&[], &[], &[], &[], &["VS33"])),
    (0xE0111, NameAliases::new(&[], &[], &[], &[], &["VS34"])),
    (0xE0112, NameAliases::new(&[], &[], &[], &[], &["VS35"])),
    (0xE0113, NameAliases::new(&[], &[], &[], &[], &["VS36"])),
    (0xE0114, NameAliases::new(&[], &[], &[], &[], &["VS37"])),
    (0xE0115, NameAliases::new(&[], &[], &[], &[], &["VS38"])),
    (0xE0116, NameAliases::new(&[], &[], &[], &[], &["VS39"])),
    (0xE0117, NameAliases::new(&[], &[], &[], &[], &["VS40"])),
    (0xE0118, NameAliases::new(&[], &[], &[], &[], &["VS41"])),
    (0xE0119, NameAliases::new(&[], &[], &[], &[], &["VS42"])),
    (0xE011A, NameAliases::new(&[], &[], &[], &[], &["VS43"])),
    (0xE011B, NameAliases::new(&[], &[], &[], &[], &["VS44"])),
    (0xE011C, NameAliases::new(&[], &[], &[], &[], &["VS45"])),
    (0xE011D, NameAliases::new(&[], &[], &[], &[], &["VS46"])),
    (0xE011E, NameAliases::new(&[], &[], &[], &[], &["VS47"])),
    (0xE011F, NameAliases::new(&[], &[], &[], &[], &["VS48"])),
    (0xE0120, NameAliases::new(&[], &[], &[], &[], &["VS49"])),
    (0xE0121, NameAliases::new(&[], &[], &[], &[], &["VS50"])),
    (0xE0122, NameAliases::new(&[], &[], &[], &[], &["VS51"])),
    (0xE0123, NameAliases::new(&[], &[], &[], &[], &["VS52"])),
    (0xE0124, NameAliases::new(&[], &[], &[], &[], &["VS53"])),
    (0xE0125, NameAliases::new(&[], &[], &[], &[], &["VS54"])),
    (0xE0126, NameAliases::new(&[], &[], &[], &[], &["VS55"])),
    (0xE0127, NameAliases::new(&[], &[], &[], &[], &["VS56"])),
    (0xE0128, NameAliases::new(&[], &[], &[], &[], &["VS57"])),
    (0xE0129, NameAliases::new(&[], &[], &[], &[], &["VS58"])),
    (0xE012A, NameAliases::new(&[], &[], &[], &[], &["VS59"])),
    (0xE012B, NameAliases::new(&[], &[], &[], &[], &["VS60"])),
    (0xE012C, NameAliases::new(&[], &[], &[], &[], &["VS61"])),
    (0xE012D, NameAliases::new(&[], &[], &[], &[], &["VS62"])),
    (0xE012E, NameAliases::new(&[], &[], &[], &[], &["VS63"])),
    (0xE012F, NameAliases::new(&[], &[], &[], &[], &["VS64"])),
    (0xE0130, NameAliases::new(&[], &[], &[], &[], &["VS65"])),
    (0xE0131, NameAliases::new(&[], &[], &[], &[], &["VS66"])),
    (0xE0132, NameAliases::new(&[], &[], &[], &[], &["VS67"])),
    (0xE0133, NameAliases::new(&[], &[], &[], &[], &["VS68"])),
    (0xE0134, NameAliases::new(&[], &[], &[], &[], &["VS69"])),
    (0xE0135, NameAliases::new(&[], &[], &[], &[], &["VS70"])),
    (0xE0136, NameAliases::new(&[], &[], &[], &[], &["VS71"])),
    (0xE0137, NameAliases::new(&[], &[], &[], &[], &["VS72"])),
    (0xE0138, NameAliases::new(&[], &[], &[], &[], &["VS73"])),
    (0xE0139, NameAliases::new(&[], &[], &[], &[], &["VS74"])),
    (0xE013A, NameAliases::new(&[], &[], &[], &[], &["VS75"])),
    (0xE013B, NameAliases::new(&[], &[], &[], &[], &["VS76"])),
    (0xE013C, NameAliases::new(&[], &[], &[], &[], &["VS77"])),
    (0xE013D, NameAliases::new(&[], &[], &[], &[], &["VS78"])),
    (0xE013E, NameAliases::new(&[], &[], &[], &[], &["VS79"])),
    (0xE013F, NameAliases::new(&[], &[], &[], &[], &["VS80"])),
    (0xE0140, NameAliases::new(&[], &[], &[], &[], &["VS81"])),
    (0xE0141, NameAliases::new(&[], &[], &[], &[], &["VS82"])),
    (0xE0142, NameAliases::new(&[], &[], &[], &[], &["VS83"])),
    (0xE0143, NameAliases::new(&[], &[], &[], &[], &["VS84"])),
    (0xE0144, NameAliases::new(&[], &[], &[], &[], &["VS85"])),
    (0xE0145, NameAliases::new(&[], &[], &[], &[], &["VS86"])),
    (0xE0146, NameAliases::new(&[], &[], &[], &[], &["VS87"])),
    (0xE0147, NameAliases::new(&[], &[], &[], &[], &["VS88"])),
    (0xE0148, NameAliases::new(&[], &[], &[], &[], &["VS89"])),
    (0xE0149, NameAliases::new(&[], &[], &[], &[], &["VS90"])),
    (0xE014A, NameAliases::new(&[], &[], &[], &[], &["VS91"])),
    (0xE014B, NameAliases::new(&[], &[], &[], &[], &["VS92"])),
    (0xE014C, NameAliases::new(&[], &[], &[], &[], &["VS93"])),
    (0xE014D, NameAliases::new(&[], &[], &[], &[], &["VS94"])),
    (0xE014E, NameAliases::new(&[], &[], &[], &[], &["VS95"])),
    (0xE014F, NameAliases::new(&[], &[], &[], &[], &["VS96"])),
    (0xE0150, NameAliases::new(&[], &[], &[], &[], &["VS97"])),
    (0xE0151, NameAliases::new(&[], &[], &[], &[], &["VS98"])),
    (0xE0152, NameAliases::new(&[], &[], &[], &[], &["VS99"])),
    (0xE0153, NameAliases::new(&[], &[], &[], &[], &["VS100"])),
    (0xE0154, NameAliases::new(&[], &[], &[], &[], &["VS101"])),
    (0xE0155, NameAliases::new(&[], &[], &[], &[], &["VS102"])),
    (0xE0156, NameAliases::new(&[], &[], &[], &[], &["VS103"])),
    (0xE0157, NameAliases::new(&[], &[], &[], &[], &["VS104"])),
    (0xE0158, NameAliases::new(&[], &[], &[], &[], &["VS105"])),
    (0xE0159, NameAliases::new(&[], &[], &[], &[], &["VS106"])),
    (0xE015A, NameAliases::new(&[], &[], &[], &[], &["VS107"])),
    (0xE015B, NameAliases::new(&[], &[], &[], &[], &["VS108"])),
    (0xE015C, NameAliases::new(&[], &[], &[], &[], &["VS109"])),
    (0xE015D, NameAliases::new(&[], &[], &[], &[], &["VS110"])),
    (0xE015E, NameAliases::new(&[], &[], &[], &[], &["VS111"])),
    (0xE015F, NameAliases::new(&[], &[], &[], &[], &["VS112"])),
    (0xE0160, NameAliases::new(&[], &[], &[], &[], &["VS113"])),
    (0xE0161, NameAliases::new(&[], &[], &[], &[], &["VS114"])),
    (0xE0162, NameAliases::new(&[], &[], &[], &[], &["VS115"])),
    (0xE0163, NameAliases::new(&[], &[], &[], &[], &["VS116"])),
    (0xE0164, NameAliases::new(&[], &[], &[], &[], &["VS117"])),
    (0xE0165, NameAliases::new(&[], &[], &[], &[], &["VS118"])),
    (0xE0166, NameAliases::new(&[], &[], &[], &[], &["VS119"])),
    (0xE0167, NameAliases::new(&[], &[], &[], &[], &["VS120"])),
    (0xE0168, NameAliases::new(&[], &[], &[], &[], &["VS121"])),
    (0xE0169, NameAliases::new(&[], &[], &[], &[], &["VS122"])),
    (0xE016A, NameAliases::new(&[], &[], &[], &[], &["VS123"])),
    (0xE016B, NameAliases::new(&[], &[], &[], &[], &["VS124"])),
    (0xE016C, NameAliases::new(&[], &[], &[], &[], &["VS125"])),
    (0xE016D, NameAliases::new(&[], &[], &[], &[], &["VS126"])),
    (0xE016E, NameAliases::new(&[], &[], &[], &[], &["VS127"])),
    (0xE016F, NameAliases::new(&[], &[], &[], &[], &["VS128"])),
    (0xE0170, NameAliases::new(&[], &[], &[], &[], &["VS129"])),
    (0xE0171, NameAliases::new(&[], &[], &[], &[], &["VS130"])),
    (0xE0172, NameAliases::new(&[], &[], &[], &[], &["VS131"])),
    (0xE0173, NameAliases::new(&[], &[], &[], &[], &["VS132"])),
    (0xE0174, NameAliases::new(&[], &[], &[], &[], &["VS133"])),
    (0xE0175, NameAliases::new(&[], &[], &[], &[], &["VS134"])),
    (0xE0176, NameAliases::new(&[], &[], &[], &[], &["VS135"])),
    (0xE0177, NameAliases::new(&[], &[], &[], &[], &["VS136"])),
    (0xE0178, NameAliases::new(&[], &[], &[], &[], &["VS137"])),
    (0xE0179, NameAliases::new(&[], &[], &[], &[], &["VS138"])),
    (0xE017A, NameAliases::new(&[], &[], &[], &[], &["VS139"])),
    (0xE017B, NameAliases::new(&[], &[], &[], &[], &["VS140"])),
    (0xE017C, NameAliases::new(&[], &[], &[], &[], &["VS141"])),
    (0xE017D, NameAliases::new(&[], &[], &[], &[], &["VS142"])),
    (0xE017E, NameAliases::new(&[], &[], &[], &[], &["VS143"])),
    (0xE017F, NameAliases::new(&[], &[], &[], &[], &["VS144"])),
    (0xE0180, NameAliases::new(&[], &[], &[], &[], &["VS145"])),
    (0xE0181, NameAliases::new(&[], &[], &[], &[], &["VS146"])),
    (0xE0182, NameAliases::new(&[], &[], &[], &[], &["VS147"])),
    (0xE0183, NameAliases::new(&[], &[], &[], &[], &["VS148"])),
    (0xE0184, NameAliases::new(&[], &[], &[], &[], &["VS149"])),
    (0xE0185, NameAliases::new(&[], &[], &[], &[], &["VS150"])),
    (0xE0186, NameAliases::new(&[], &[], &[], &[], &["VS151"])),
    (0xE0187, NameAliases::new(&[], &[], &[], &[], &["VS152"])),
    (0xE0188, NameAliases::new(&[], &[], &[], &[], &["VS153"])),
    (0xE0189, NameAliases::new(&[], &[], &[], &[], &["VS154"])),
    (0xE018A, NameAliases::new(&[], &[], &[], &[], &["VS155"])),
    (0xE018B, NameAliases::new(&[], &[], &[], &[], &["VS156"])),
    (0xE018C, NameAliases::new(&[], &[], &[], &[], &["VS157"])),
    (0xE018D, NameAliases::new(&[], &[], &[], &[], &["VS158"])),
    (0xE018E, NameAliases::new(&[], &[], &[], &[], &["VS159"])),
    (0xE018F, NameAliases::new(&[], &[], &[], &[], &["VS160"])),
    (0xE0190, NameAliases::new(&[], &[], &[], &[], &["VS161"])),
    (0xE0191, NameAliases::new(&[], &[], &[], &[], &["VS162"])),
    (0xE0192, NameAliases::new(&[], &[], &[], &[], &["VS163"])),
    (0xE0193, NameAliases::new(&[], &[], &[], &[], &["VS164"])),
    (0xE0194, NameAliases::new(&[], &[], &[], &[], &["VS165"])),
    (0xE0195, NameAliases::new(&[], &[], &[], &[], &["VS166"])),
    (0xE0196, NameAliases::new(&[], &[], &[], &[], &["VS167"])),
    (0xE0197, NameAliases::new(&[], &[], &[], &[], &["VS168"])),
    (0xE0198, NameAliases::new(&[], &[], &[], &[], &["VS169"])),
    (0xE0199, NameAliases::new(&[], &[], &[], &[], &["VS170"])),
    (0xE019A, NameAliases::new(&[], &[], &[], &[], &["VS171"])),
    (0xE019B, NameAliases::new(&[], &[], &[], &[], &["VS172"])),
    (0xE019C, NameAliases::new(&[], &[], &[], &[], &["VS173"])),
    (0xE019D, NameAliases::new(&[], &[], &[], &[], &["VS174"])),
    (0xE019E, NameAliases::new(&[], &[], &[], &[], &["VS175"])),
    (0xE019F, NameAliases::new(&[], &[], &[], &[], &["VS176"])),
    (0xE01A0, NameAliases::new(&[], &[], &[], &[], &["VS177"])),
    (0xE01A1, NameAliases::new(&[], &[], &[], &[], &["VS178"])),
    (0xE01A2, NameAliases::new(&[], &[], &[], &[], &["VS179"])),
    (0xE01A3, NameAliases::new(&[], &[], &[], &[], &["VS180"])),
    (0xE01A4, NameAliases::new(&[], &[], &[], &[], &["VS181"])),
    (0xE01A5, NameAliases::new(&[], &[], &[], &[], &["VS182"])),
    (0xE01A6, NameAliases::new(&[], &[], &[], &[], &["VS183"])),
    (0xE01A7, NameAliases::new(&[], &[], &[], &[], &["VS184"])),
    (0xE01A8, NameAliases::new(&[], &[], &[], &[], &["VS185"])),
    (0xE01A9, NameAliases::new(&[], &[], &[], &[], &["VS186"])),
    (0xE01AA, NameAliases::new(&[], &[], &[], &[], &["VS187"])),
    (0xE01AB, NameAliases::new(&[], &[], &[], &[], &["VS188"])),
    (0xE01AC, NameAliases::new(&[], &[], &[], &[], &["VS189"])),
    (0xE01AD, NameAliases::new(&[], &[], &[], &[], &["VS190"])),
    (0xE01AE, NameAliases::new(&[], &[], &[], &[], &["VS191"])),
    (0xE01AF, NameAliases::new(&[], &[], &[], &[], &["VS192"])),
    (0xE01B0, NameAliases::new(&[], &[], &[], &[], &["VS193"])),
    (0xE01B1, NameAliases::new(&[], &[], &[], &[], &["VS194"])),
    (0xE01B2, NameAliases::new(&[], &[], &[], &[], &["VS195"])),
    (0xE01B3, NameAliases::new(&[], &[], &[], &[], &["VS196"])),
    (0xE01B4, NameAliases::new(&[], &[], &[], &[], &["VS197"])),
    (0xE01B5, NameAliases::new(&[], &[], &[], &[], &["VS198"])),
    (0xE01B6, NameAliases::new(&[], &[], &[], &[], &["VS199"])),
    (0xE01B7, NameAliases::new(&[], &[], &[], &[], &["VS200"])),
    (0xE01B8, NameAliases::new(&[], &[], &[], &[], &["VS201"])),
    (0xE01B9, NameAliases::new(&[], &[], &[], &[], &["VS202"])),
    (0xE01BA, NameAliases::new(&[], &[], &[], &[], &["VS203"])),
    (0xE01BB, NameAliases::new(&[], &[], &[], &[], &["VS204"])),
    (0xE01BC, NameAliases::new(&[], &[], &[], &[], &["VS205"])),
    (0xE01BD, NameAliases::new(&[], &[], &[], &[], &["VS206"])),
    (0xE01BE, NameAliases::new(&[], &[], &[], &[], &["VS207"])),
    (0xE01BF, NameAliases::new(&[], &[], &[], &[], &["VS208"])),
    (0xE01C0, NameAliases::new(&[], &[], &[], &[], &["VS209"])),
    (0xE01C1, NameAliases::new(&[], &[], &[], &[], &["VS210"])),
    (0xE01C2, NameAliases::new(&[], &[], &[], &[], &["VS211"])),
    (0xE01C3, NameAliases::new(&[], &[], &[], &[], &["VS212"])),
    (0xE01C4, NameAliases::new(&[], &[], &[], &[], &["VS213"])),
    (0xE01C5, NameAliases::new(&[], &[], &[], &[], &["VS214"])),
    (0xE01C6, NameAliases::new(&[], &[], &[], &[], &["VS215"])),
    (0xE01C7, NameAliases::new(&[], &[], &[], &[], &["VS216"])),
    (0xE01C8, NameAliases::new(&[], &[], &[], &[], &["VS217"])),
    (0xE01C9, NameAliases::new(&[], &[], &[], &[], &["VS218"])),
    (0xE01CA, NameAliases::new(&[], &[], &[], &[], &["VS219"])),
    (0xE01CB, NameAliases::new(&[], &[], &[], &[], &["VS220"])),
    (0xE01CC, NameAliases::new(&[], &[], &[], &[], &["VS221"])),
    (0xE01CD, NameAliases::new(&[], &[], &[], &[], &["VS222"])),
    (0xE01CE, NameAliases::new(&[], &[], &[], &[], &["VS223"])),
    (0xE01CF, NameAliases::new(&[], &[], &[], &[], &["VS224"])),
    (0xE01D0, NameAliases::new(&[], &[], &[], &[], &["VS225"])),
    (0xE01D1, NameAliases::new(&[], &[], &[], &[], &["VS226"])),
    (0xE01D2, NameAliases::new(&[], &[], &[], &[], &["VS227"])),
    (0xE01D3, NameAliases::new(&[], &[], &[], &[], &["VS228"])),
    (0xE01D4, NameAliases::new(&[], &[], &[], &[], &["VS229"])),
    (0xE01D5, NameAliases::new(&[], &[], &[], &[], &["VS230"])),
    (0xE01D6, NameAliases::new(&[], &[], &[], &[], &["VS231"])),
    (0xE01D7, NameAliases::new(&[], &[], &[], &[], &["VS232"])),
    (0xE01D8, NameAliases::new(&[], &[], &[], &[], &["VS233"])),
    (0xE01D9, NameAliases::new(&[], &[], &[], &[], &["VS234"])),
    (0xE01DA, NameAliases::new(&[], &[], &[], &[], &["VS235"])),
    (0xE01DB, NameAliases::new(&[], &[], &[], &[], &["VS236"])),
    (0xE01DC, NameAliases::new(&[], &[], &[], &[], &["VS237"])),
    (0xE01DD, NameAliases::new(&[], &[], &[], &[], &["VS238"])),
    (0xE01DE, NameAliases::new(&[], &[], &[], &[], &["VS239"])),
    (0xE01DF, NameAliases::new(&[], &[], &[], &[], &["VS240"])),
    (0xE01E0, NameAliases::new(&[], &[], &[], &[], &["VS241"])),
    (0xE01E1, NameAliases::new(&[], &[], &[], &[], &["VS242"])),
    (0xE01E2, NameAliases::new(&[], &[], &[], &[], &["VS243"])),
    (0xE01E3, NameAliases::new(&[], &[], &[], &[], &["VS244"])),
    (0xE01E4, NameAliases::new(&[], &[], &[], &[], &["VS245"])),
    (0xE01E5, NameAliases::new(&[], &[], &[], &[], &["VS246"])),
    (0xE01E6, NameAliases::new(&[], &[], &[], &[], &["VS247"])),
    (0xE01E7, NameAliases::new(&[], &[], &[], &[], &["VS248"])),
    (0xE01E8, NameAliases::new(&[], &[], &[], &[], &["VS249"])),
    (0xE01E9, NameAliases::new(&[], &[], &[], &[], &["VS250"])),
    (0xE01EA, NameAliases::new(&[], &[], &[], &[], &["VS251"])),
    (0xE01EB, NameAliases::new(&[], &[], &[], &[], &["VS252"])),
    (0xE01EC, NameAliases::new(&[], &[], &[], &[], &["VS253"])),
    (0xE01ED, NameAliases::new(&[], &[], &[], &[], &["VS254"])),
    (0xE01EE, NameAliases::new(&[], &[], &[], &[], &["VS255"])),
    (0xE01EF, NameAliases::new(&[], &[], &[], &[], &["VS256"])),
];
