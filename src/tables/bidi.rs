// Generated from:
// - https://www.unicode.org/Public/14.0.0/ucd/UnicodeData.txt
// - https://www.unicode.org/Public/14.0.0/ucd/extracted/DerivedBidiClass.txt
// BIDI_CLASSES covers assigned code points. DEFAULT_BIDI_CLASSES holds the
// non-L defaults DerivedBidiClass.txt gives unassigned code points.
// Do not edit by hand.

use crate::bidi::BidiClass;
use crate::interval::IntervalRecord;

type R = IntervalRecord<BidiClass>;

// Strong types
const L: BidiClass = BidiClass::LeftToRight;
const RTL: BidiClass = BidiClass::RightToLeft;
const AL: BidiClass = BidiClass::ArabicLetter;
// Weak types
const EN: BidiClass = BidiClass::EuropeanNumber;
const ES: BidiClass = BidiClass::EuropeanSeparator;
const ET: BidiClass = BidiClass::EuropeanTerminator;
const AN: BidiClass = BidiClass::ArabicNumber;
const CS: BidiClass = BidiClass::CommonSeparator;
const NSM: BidiClass = BidiClass::NonspacingMark;
const BN: BidiClass = BidiClass::BoundaryNeutral;
// Neutral types
const B: BidiClass = BidiClass::ParagraphSeparator;
const S: BidiClass = BidiClass::SegmentSeparator;
const WS: BidiClass = BidiClass::WhiteSpace;
const ON: BidiClass = BidiClass::OtherNeutral;
// Explicit formatting types
const LRE: BidiClass = BidiClass::LeftToRightEmbedding;
const LRO: BidiClass = BidiClass::LeftToRightOverride;
const RLE: BidiClass = BidiClass::RightToLeftEmbedding;
const RLO: BidiClass = BidiClass::RightToLeftOverride;
const PDF: BidiClass = BidiClass::PopDirectionalFormat;
const LRI: BidiClass = BidiClass::LeftToRightIsolate;
const RLI: BidiClass = BidiClass::RightToLeftIsolate;
const FSI: BidiClass = BidiClass::FirstStrongIsolate;
const PDI: BidiClass = BidiClass::PopDirectionalIsolate;

pub const DEFAULT_BIDI_CLASSES: &[R] = &[
    R::single(0x0590, 0x0590, RTL),
    R::single(0x05C8, 0x05CF, RTL),
    R::single(0x05EB, 0x05EE, RTL),
    R::single(0x05F5, 0x05FF, RTL),
    R::single(0x070E, 0x070E, AL),
    R::single(0x074B, 0x074C, AL),
    R::single(0x07B2, 0x07BF, AL),
    R::single(0x07FB, 0x07FC, RTL),
    R::single(0x082E, 0x082F, RTL),
    R::single(0x083F, 0x083F, RTL),
    R::single(0x085C, 0x085D, RTL),
    R::single(0x085F, 0x085F, RTL),
    R::single(0x086B, 0x086F, AL),
    R::single(0x088F, 0x088F, AL),
    R::single(0x0892, 0x0897, AL),
    R::single(0x2065, 0x2065, BN),
    R::single(0x20C1, 0x20CF, ET),
    R::single(0xFB37, 0xFB37, RTL),
    R::single(0xFB3D, 0xFB3D, RTL),
    R::single(0xFB3F, 0xFB3F, RTL),
    R::single(0xFB42, 0xFB42, RTL),
    R::single(0xFB45, 0xFB45, RTL),
    R::single(0xFBC3, 0xFBD2, AL),
    R::single(0xFD90, 0xFD91, AL),
    R::single(0xFDC8, 0xFDCE, AL),
    R::single(0xFDD0, 0xFDEF, BN),
    R::single(0xFE75, 0xFE75, AL),
    R::single(0xFEFD, 0xFEFE, AL),
    R::single(0xFFF0, 0xFFF8, BN),
    R::single(0xFFFE, 0xFFFF, BN),
    R::single(0x10806, 0x10807, RTL),
    R::single(0x10809, 0x10809, RTL),
    R::single(0x10836, 0x10836, RTL),
    R::single(0x10839, 0x1083B, RTL),
    R::single(0x1083D, 0x1083E, RTL),
    R::single(0x10856, 0x10856, RTL),
    R::single(0x1089F, 0x108A6, RTL),
    R::single(0x108B0, 0x108DF, RTL),
    R::single(0x108F3, 0x108F3, RTL),
    R::single(0x108F6, 0x108FA, RTL),
    R::single(0x1091C, 0x1091E, RTL),
    R::single(0x1093A, 0x1093E, RTL),
    R::single(0x10940, 0x1097F, RTL),
    R::single(0x109B8, 0x109BB, RTL),
    R::single(0x109D0, 0x109D1, RTL),
    R::single(0x10A04, 0x10A04, RTL),
    R::single(0x10A07, 0x10A0B, RTL),
    R::single(0x10A14, 0x10A14, RTL),
    R::single(0x10A18, 0x10A18, RTL),
    R::single(0x10A36, 0x10A37, RTL),
    R::single(0x10A3B, 0x10A3E, RTL),
    R::single(0x10A49, 0x10A4F, RTL),
    R::single(0x10A59, 0x10A5F, RTL),
    R::single(0x10AA0, 0x10ABF, RTL),
    R::single(0x10AE7, 0x10AEA, RTL),
    R::single(0x10AF7, 0x10AFF, RTL),
    R::single(0x10B36, 0x10B38, RTL),
    R::single(0x10B56, 0x10B57, RTL),
    R::single(0x10B73, 0x10B77, RTL),
    R::single(0x10B92, 0x10B98, RTL),
    R::single(0x10B9D, 0x10BA8, RTL),
    R::single(0x10BB0, 0x10BFF, RTL),
    R::single(0x10C49, 0x10C7F, RTL),
    R::single(0x10CB3, 0x10CBF, RTL),
    R::single(0x10CF3, 0x10CF9, RTL),
    R::single(0x10D28, 0x10D2F, AL),
    R::single(0x10D3A, 0x10D3F, AL),
    R::single(0x10D40, 0x10E5F, RTL),
    R::single(0x10E7F, 0x10E7F, RTL),
    R::single(0x10EAA, 0x10EAA, RTL),
    R::single(0x10EAE, 0x10EAF, RTL),
    R::single(0x10EB2, 0x10EFF, RTL),
    R::single(0x10F28, 0x10F2F, RTL),
    R::single(0x10F5A, 0x10F6F, AL),
    R::single(0x10F8A, 0x10FAF, RTL),
    R::single(0x10FCC, 0x10FDF, RTL),
    R::single(0x10FF7, 0x10FFF, RTL),
    R::single(0x1E8C5, 0x1E8C6, RTL),
    R::single(0x1E8D7, 0x1E8FF, RTL),
    R::single(0x1E94C, 0x1E94F, RTL),
    R::single(0x1E95A, 0x1E95D, RTL),
    R::single(0x1E960, 0x1EC6F, RTL),
    R::single(0x1EC70, 0x1EC70, AL),
    R::single(0x1ECB5, 0x1ECBF, AL),
    R::single(0x1ECC0, 0x1ECFF, RTL),
    R::single(0x1ED00, 0x1ED00, AL),
    R::single(0x1ED3E, 0x1ED4F, AL),
    R::single(0x1ED50, 0x1EDFF, RTL),
    R::single(0x1EE04, 0x1EE04, AL),
    R::single(0x1EE20, 0x1EE20, AL),
    R::single(0x1EE23, 0x1EE23, AL),
    R::single(0x1EE25, 0x1EE26, AL),
    R::single(0x1EE28, 0x1EE28, AL),
    R::single(0x1EE33, 0x1EE33, AL),
    R::single(0x1EE38, 0x1EE38, AL),
    R::single(0x1EE3A, 0x1EE3A, AL),
    R::single(0x1EE3C, 0x1EE41, AL),
    R::single(0x1EE43, 0x1EE46, AL),
    R::single(0x1EE48, 0x1EE48, AL),
    R::single(0x1EE4A, 0x1EE4A, AL),
    R::single(0x1EE4C, 0x1EE4C, AL),
    R::single(0x1EE50, 0x1EE50, AL),
    R::single(0x1EE53, 0x1EE53, AL),
    R::single(0x1EE55, 0x1EE56, AL),
    R::single(0x1EE58, 0x1EE58, AL),
    R::single(0x1EE5A, 0x1EE5A, AL),
    R::single(0x1EE5C, 0x1EE5C, AL),
    R::single(0x1EE5E, 0x1EE5E, AL),
    R::single(0x1EE60, 0x1EE60, AL),
    R::single(0x1EE63, 0x1EE63, AL),
    R::single(0x1EE65, 0x1EE66, AL),
    R::single(0x1EE6B, 0x1EE6B, AL),
    R::single(0x1EE73, 0x1EE73, AL),
    R::single(0x1EE78, 0x1EE78, AL),
    R::single(0x1EE7D, 0x1EE7D, AL),
    R::single(0x1EE7F, 0x1EE7F, AL),
    R::single(0x1EE8A, 0x1EE8A, AL),
    R::single(0x1EE9C, 0x1EEA0, AL),
    R::single(0x1EEA4, 0x1EEA4, AL),
    R::single(0x1EEAA, 0x1EEAA, AL),
    R::single(0x1EEBC, 0x1EEEF, AL),
    R::single(0x1EEF2, 0x1EEFF, AL),
    R::single(0x1EF00, 0x1EFFF, RTL),
    R::single(0x1FFFE, 0x1FFFF, BN),
    R::single(0x2FFFE, 0x2FFFF, BN),
    R::single(0x3FFFE, 0x3FFFF, BN),
    R::single(0x4FFFE, 0x4FFFF, BN),
    R::single(0x5FFFE, 0x5FFFF, BN),
    R::single(0x6FFFE, 0x6FFFF, BN),
    R::single(0x7FFFE, 0x7FFFF, BN),
    R::single(0x8FFFE, 0x8FFFF, BN),
    R::single(0x9FFFE, 0x9FFFF, BN),
    R::single(0xAFFFE, 0xAFFFF, BN),
    R::single(0xBFFFE, 0xBFFFF, BN),
    R::single(0xCFFFE, 0xCFFFF, BN),
    R::single(0xDFFFE, 0xE0000, BN),
    R::single(0xE0002, 0xE001F, BN),
    R::single(0xE0080, 0xE00FF, BN),
    R::single(0xE01F0, 0xE0FFF, BN),
    R::single(0xEFFFE, 0xEFFFF, BN),
    R::single(0xFFFFE, 0xFFFFF, BN),
    R::single(0x10FFFE, 0x10FFFF, BN),
];

pub const BIDI_CLASSES: &[R] = &[
    R::single(0x0000, 0x0008, BN),
    R::single(0x0009, 0x0009, S),
    R::single(0x000A, 0x000A, B),
    R::single(0x000B, 0x000B, S),
    R::single(0x000C, 0x000C, WS),
    R::single(0x000D, 0x000D, B),
    R::single(0x000E, 0x001B, BN),
    R::single(0x001C, 0x001E, B),
    R::single(0x001F, 0x001F, S),
    R::single(0x0020, 0x0020, WS),
    R::single(0x0021, 0x0022, ON),
    R::single(0x0023, 0x0025, ET),
    R::single(0x0026, 0x002A, ON),
    R::single(0x002B, 0x002B, ES),
    R::single(0x002C, 0x002C, CS),
    R::single(0x002D, 0x002D, ES),
    R::single(0x002E, 0x002F, CS),
    R::single(0x0030, 0x0039, EN),
    R::single(0x003A, 0x003A, CS),
    R::single(0x003B, 0x0040, ON),
    R::single(0x0041, 0x005A, L),
    R::single(0x005B, 0x0060, ON),
    R::single(0x0061, 0x007A, L),
    R::single(0x007B, 0x007E, ON),
    R::single(0x007F, 0x0084, BN),
    R::single(0x0085, 0x0085, B),
    R::single(0x0086, 0x009F, BN),
    R::single(0x00A0, 0x00A0, CS),
    R::single(0x00A1, 0x00A1, ON),
    R::single(0x00A2, 0x00A5, ET),
    R::single(0x00A6, 0x00A9, ON),
    R::single(0x00AA, 0x00AA, L),
    R::single(0x00AB, 0x00AC, ON),
    R::single(0x00AD, 0x00AD, BN),
    R::single(0x00AE, 0x00AF, ON),
    R::single(0x00B0, 0x00B1, ET),
    R::single(0x00B2, 0x00B3, EN),
    R::single(0x00B4, 0x00B4, ON),
    R::single(0x00B5, 0x00B5, L),
    R::single(0x00B6, 0x00B8, ON),
    R::single(0x00B9, 0x00B9, EN),
    R::single(0x00BA, 0x00BA, L),
    R::single(0x00BB, 0x00BF, ON),
    R::single(0x00C0, 0x00D6, L),
    R::single(0x00D7, 0x00D7, ON),
    R::single(0x00D8, 0x00F6, L),
    R::single(0x00F7, 0x00F7, ON),
    R::single(0x00F8, 0x02B8, L),
    R::single(0x02B9, 0x02BA, ON),
    R::single(0x02BB, 0x02C1, L),
    R::single(0x02C2, 0x02CF, ON),
    R::single(0x02D0, 0x02D1, L),
    R::single(0x02D2, 0x02DF, ON),
    R::single(0x02E0, 0x02E4, L),
    R::single(0x02E5, 0x02ED, ON),
    R::single(0x02EE, 0x02EE, L),
    R::single(0x02EF, 0x02FF, ON),
    R::single(0x0300, 0x036F, NSM),
    R::single(0x0370, 0x0373, L),
    R::single(0x0374, 0x0375, ON),
    R::single(0x0376, 0x0377, L),
    R::single(0x037A, 0x037D, L),
    R::single(0x037E, 0x037E, ON),
    R::single(0x037F, 0x037F, L),
    R::single(0x0384, 0x0385, ON),
    R::single(0x0386, 0x0386, L),
    R::single(0x0387, 0x0387, ON),
    R::single(0x0388, 0x038A, L),
    R::single(0x038C, 0x038C, L),
    R::single(0x038E, 0x03A1, L),
    R::single(0x03A3, 0x03F5, L),
    R::single(0x03F6, 0x03F6, ON),
    R::single(0x03F7, 0x0482, L),
    R::single(0x0483, 0x0489, NSM),
    R::single(0x048A, 0x052F, L),
    R::single(0x0531, 0x0556, L),
    R::single(0x0559, 0x0589, L),
    R::single(0x058A, 0x058A, ON),
    R::single(0x058D, 0x058E, ON),
    R::single(0x058F, 0x058F, ET),
    R::single(0x0591, 0x05BD, NSM),
    R::single(0x05BE, 0x05BE, RTL),
    R::single(0x05BF, 0x05BF, NSM),
    R::single(0x05C0, 0x05C0, RTL),
    R::single(0x05C1, 0x05C2, NSM),
    R::single(0x05C3, 0x05C3, RTL),
    R::single(0x05C4, 0x05C5, NSM),
    R::single(0x05C6, 0x05C6, RTL),
    R::single(0x05C7, 0x05C7, NSM),
    R::single(0x05D0, 0x05EA, RTL),
    R::single(0x05EF, 0x05F4, RTL),
    R::single(0x0600, 0x0605, AN),
    R::single(0x0606, 0x0607, ON),
    R::single(0x0608, 0x0608, AL),
    R::single(0x0609, 0x060A, ET),
    R::single(0x060B, 0x060B, AL),
    R::single(0x060C, 0x060C, CS),
    R::single(0x060D, 0x060D, AL),
    R::single(0x060E, 0x060F, ON),
    R::single(0x0610, 0x061A, NSM),
    R::single(0x061B, 0x064A, AL),
    R::single(0x064B, 0x065F, NSM),
    R::single(0x0660, 0x0669, AN),
    R::single(0x066A, 0x066A, ET),
    R::single(0x066B, 0x066C, AN),
    R::single(0x066D, 0x066F, AL),
    R::single(0x0670, 0x0670, NSM),
    R::single(0x0671, 0x06D5, AL),
    R::single(0x06D6, 0x06DC, NSM),
    R::single(0x06DD, 0x06DD, AN),
    R::single(0x06DE, 0x06DE, ON),
    R::single(0x06DF, 0x06E4, NSM),
    R::single(0x06E5, 0x06E6, AL),
    R::single(0x06E7, 0x06E8, NSM),
    R::single(0x06E9, 0x06E9, ON),
    R::single(0x06EA, 0x06ED, NSM),
    R::single(0x06EE, 0x06EF, AL),
    R::single(0x06F0, 0x06F9, EN),
    R::single(0x06FA, 0x070D, AL),
    R::single(0x070F, 0x0710, AL),
    R::single(0x0711, 0x0711, NSM),
    R::single(0x0712, 0x072F, AL),
    R::single(0x0730, 0x074A, NSM),
    R::single(0x074D, 0x07A5, AL),
    R::single(0x07A6, 0x07B0, NSM),
    R::single(0x07B1, 0x07B1, AL),
    R::single(0x07C0, 0x07EA, RTL),
    R::single(0x07EB, 0x07F3, NSM),
    R::single(0x07F4, 0x07F5, RTL),
    R::single(0x07F6, 0x07F9, ON),
    R::single(0x07FA, 0x07FA, RTL),
    R::single(0x07FD, 0x07FD, NSM),
    R::single(0x07FE, 0x0815, RTL),
    R::single(0x0816, 0x0819, NSM),
    R::single(0x081A, 0x081A, RTL),
    R::single(0x081B, 0x0823, NSM),
    R::single(0x0824, 0x0824, RTL),
    R::single(0x0825, 0x0827, NSM),
    R::single(0x0828, 0x0828, RTL),
    R::single(0x0829, 0x082D, NSM),
    R::single(0x0830, 0x083E, RTL),
    R::single(0x0840, 0x0858, RTL),
    R::single(0x0859, 0x085B, NSM),
    R::single(0x085E, 0x085E, RTL),
    R::single(0x0860, 0x086A, AL),
    R::single(0x0870, 0x088E, AL),
    R::single(0x0890, 0x0891, AN),
    R::single(0x0898, 0x089F, NSM),
    R::single(0x08A0, 0x08C9, AL),
    R::single(0x08CA, 0x08E1, NSM),
    R::single(0x08E2, 0x08E2, AN),
    R::single(0x08E3, 0x0902, NSM),
    R::single(0x0903, 0x0939, L),
    R::single(0x093A, 0x093A, NSM),
    R::single(0x093B, 0x093B, L),
    R::single(0x093C, 0x093C, NSM),
    R::single(0x093D, 0x0940, L),
    R::single(0x0941, 0x0948, NSM),
    R::single(0x0949, 0x094C, L),
    R::single(0x094D, 0x094D, NSM),
    R::single(0x094E, 0x0950, L),
    R::single(0x0951, 0x0957, NSM),
    R::single(0x0958, 0x0961, L),
    R::single(0x0962, 0x0963, NSM),
    R::single(0x0964, 0x0980, L),
    R::single(0x0981, 0x0981, NSM),
    R::single(0x0982, 0x0983, L),
    R::single(0x0985, 0x098C, L),
    R::single(0x098F, 0x0990, L),
    R::single(0x0993, 0x09A8, L),
    R::single(0x09AA, 0x09B0, L),
    R::single(0x09B2, 0x09B2, L),
    R::single(0x09B6, 0x09B9, L),
    R::single(0x09BC, 0x09BC, NSM),
    R::single(0x09BD, 0x09C0, L),
    R::single(0x09C1, 0x09C4, NSM),
    R::single(0x09C7, 0x09C8, L),
    R::single(0x09CB, 0x09CC, L),
    R::single(0x09CD, 0x09CD, NSM),
    R::single(0x09CE, 0x09CE, L),
    R::single(0x09D7, 0x09D7, L),
    R::single(0x09DC, 0x09DD, L),
    R::single(0x09DF, 0x09E1, L),
    R::single(0x09E2, 0x09E3, NSM),
    R::single(0x09E6, 0x09F1, L),
    R::single(0x09F2, 0x09F3, ET),
    R::single(0x09F4, 0x09FA, L),
    R::single(0x09FB, 0x09FB, ET),
    R::single(0x09FC, 0x09FD, L),
    R::single(0x09FE, 0x09FE, NSM),
    R::single(0x0A01, 0x0A02, NSM),
    R::single(0x0A03, 0x0A03, L),
    R::single(0x0A05, 0x0A0A, L),
    R::single(0x0A0F, 0x0A10, L),
    R::single(0x0A13, 0x0A28, L),
    R::single(0x0A2A, 0x0A30, L),
    R::single(0x0A32, 0x0A33, L),
    R::single(0x0A35, 0x0A36, L),
    R::single(0x0A38, 0x0A39, L),
    R::single(0x0A3C, 0x0A3C, NSM),
    R::single(0x0A3E, 0x0A40, L),
    R::single(0x0A41, 0x0A42, NSM),
    R::single(0x0A47, 0x0A48, NSM),
    R::single(0x0A4B, 0x0A4D, NSM),
    R::single(0x0A51, 0x0A51, NSM),
    R::single(0x0A59, 0x0A5C, L),
    R::single(0x0A5E, 0x0A5E, L),
    R::single(0x0A66, 0x0A6F, L),
    R::single(0x0A70, 0x0A71, NSM),
    R::single(0x0A72, 0x0A74, L),
    R::single(0x0A75, 0x0A75, NSM),
    R::single(0x0A76, 0x0A76, L),
    R::single(0x0A81, 0x0A82, NSM),
    R::single(0x0A83, 0x0A83, L),
    R::single(0x0A85, 0x0A8D, L),
    R::single(0x0A8F, 0x0A91, L),
    R::single(0x0A93, 0x0AA8, L),
    R::single(0x0AAA, 0x0AB0, L),
    R::single(0x0AB2, 0x0AB3, L),
    R::single(0x0AB5, 0x0AB9, L),
    R::single(0x0ABC, 0x0ABC, NSM),
    R::single(0x0ABD, 0x0AC0, L),
    R::single(0x0AC1, 0x0AC5, NSM),
    R::single(0x0AC7, 0x0AC8, NSM),
    R::single(0x0AC9, 0x0AC9, L),
    R::single(0x0ACB, 0x0ACC, L),
    R::single(0x0ACD, 0x0ACD, NSM),
    R::single(0x0AD0, 0x0AD0, L),
    R::single(0x0AE0, 0x0AE1, L),
    R::single(0x0AE2, 0x0AE3, NSM),
    R::single(0x0AE6, 0x0AF0, L),
    R::single(0x0AF1, 0x0AF1, ET),
    R::single(0x0AF9, 0x0AF9, L),
    R::single(0x0AFA, 0x0AFF, NSM),
    R::single(0x0B01, 0x0B01, NSM),
    R::single(0x0B02, 0x0B03, L),
    R::single(0x0B05, 0x0B0C, L),
    R::single(0x0B0F, 0x0B10, L),
    R::single(0x0B13, 0x0B28, L),
    R::single(0x0B2A, 0x0B30, L),
    R::single(0x0B32, 0x0B33, L),
    R::single(0x0B35, 0x0B39, L),
    R::single(0x0B3C, 0x0B3C, NSM),
    R::single(0x0B3D, 0x0B3E, L),
    R::single(0x0B3F, 0x0B3F, NSM),
    R::single(0x0B40, 0x0B40, L),
    R::single(0x0B41, 0x0B44, NSM),
    R::single(0x0B47, 0x0B48, L),
    R::single(0x0B4B, 0x0B4C, L),
    R::single(0x0B4D, 0x0B4D, NSM),
    R::single(0x0B55, 0x0B56, NSM),
    R::single(0x0B57, 0x0B57, L),
    R::single(0x0B5C, 0x0B5D, L),
    R::single(0x0B5F, 0x0B61, L),
    R::single(0x0B62, 0x0B63, NSM),
    R::single(0x0B66, 0x0B77, L),
    R::single(0x0B82, 0x0B82, NSM),
    R::single(0x0B83, 0x0B83, L),
    R::single(0x0B85, 0x0B8A, L),
    R::single(0x0B8E, 0x0B90, L),
    R::single(0x0B92, 0x0B95, L),
    R::single(0x0B99, 0x0B9A, L),
    R::single(0x0B9C, 0x0B9C, L),
    R::single(0x0B9E, 0x0B9F, L),
    R::single(0x0BA3, 0x0BA4, L),
    R::single(0x0BA8, 0x0BAA, L),
    R::single(0x0BAE, 0x0BB9, L),
    R::single(0x0BBE, 0x0BBF, L),
    R::single(0x0BC0, 0x0BC0, NSM),
    R::single(0x0BC1, 0x0BC2, L),
    R::single(0x0BC6, 0x0BC8, L),
    R::single(0x0BCA, 0x0BCC, L),
    R::single(0x0BCD, 0x0BCD, NSM),
    R::single(0x0BD0, 0x0BD0, L),
    R::single(0x0BD7, 0x0BD7, L),
    R::single(0x0BE6, 0x0BF2, L),
    R::single(0x0BF3, 0x0BF8, ON),
    R::single(0x0BF9, 0x0BF9, ET),
    R::single(0x0BFA, 0x0BFA, ON),
    R::single(0x0C00, 0x0C00, NSM),
    R::single(0x0C01, 0x0C03, L),
    R::single(0x0C04, 0x0C04, NSM),
    R::single(0x0C05, 0x0C0C, L),
    R::single(0x0C0E, 0x0C10, L),
    R::single(0x0C12, 0x0C28, L),
    R::single(0x0C2A, 0x0C39, L),
    R::single(0x0C3C, 0x0C3C, NSM),
    R::single(0x0C3D, 0x0C3D, L),
    R::single(0x0C3E, 0x0C40, NSM),
    R::single(0x0C41, 0x0C44, L),
    R::single(0x0C46, 0x0C48, NSM),
    R::single(0x0C4A, 0x0C4D, NSM),
    R::single(0x0C55, 0x0C56, NSM),
    R::single(0x0C58, 0x0C5A, L),
    R::single(0x0C5D, 0x0C5D, L),
    R::single(0x0C60, 0x0C61, L),
    R::single(0x0C62, 0x0C63, NSM),
    R::single(0x0C66, 0x0C6F, L),
    R::single(0x0C77, 0x0C77, L),
    R::single(0x0C78, 0x0C7E, ON),
    R::single(0x0C7F, 0x0C80, L),
    R::single(0x0C81, 0x0C81, NSM),
    R::single(0x0C82, 0x0C8C, L),
    R::single(0x0C8E, 0x0C90, L),
    R::single(0x0C92, 0x0CA8, L),
    R::single(0x0CAA, 0x0CB3, L),
    R::single(0x0CB5, 0x0CB9, L),
    R::single(0x0CBC, 0x0CBC, NSM),
    R::single(0x0CBD, 0x0CC4, L),
    R::single(0x0CC6, 0x0CC8, L),
    R::single(0x0CCA, 0x0CCB, L),
    R::single(0x0CCC, 0x0CCD, NSM),
    R::single(0x0CD5, 0x0CD6, L),
    R::single(0x0CDD, 0x0CDE, L),
    R::single(0x0CE0, 0x0CE1, L),
    R::single(0x0CE2, 0x0CE3, NSM),
    R::single(0x0CE6, 0x0CEF, L),
    R::single(0x0CF1, 0x0CF2, L),
    R::single(0x0D00, 0x0D01, NSM),
    R::single(0x0D02, 0x0D0C, L),
    R::single(0x0D0E, 0x0D10, L),
    R::single(0x0D12, 0x0D3A, L),
    R::single(0x0D3B, 0x0D3C, NSM),
    R::single(0x0D3D, 0x0D40, L),
    R::single(0x0D41, 0x0D44, NSM),
    R::single(0x0D46, 0x0D48, L),
    R::single(0x0D4A, 0x0D4C, L),
    R::single(0x0D4D, 0x0D4D, NSM),
    R::single(0x0D4E, 0x0D4F, L),
    R::single(0x0D54, 0x0D61, L),
    R::single(0x0D62, 0x0D63, NSM),
    R::single(0x0D66, 0x0D7F, L),
    R::single(0x0D81, 0x0D81, NSM),
    R::single(0x0D82, 0x0D83, L),
    R::single(0x0D85, 0x0D96, L),
    R::single(0x0D9A, 0x0DB1, L),
    R::single(0x0DB3, 0x0DBB, L),
    R::single(0x0DBD, 0x0DBD, L),
    R::single(0x0DC0, 0x0DC6, L),
    R::single(0x0DCA, 0x0DCA, NSM),
    R::single(0x0DCF, 0x0DD1, L),
    R::single(0x0DD2, 0x0DD4, NSM),
    R::single(0x0DD6, 0x0DD6, NSM),
    R::single(0x0DD8, 0x0DDF, L),
    R::single(0x0DE6, 0x0DEF, L),
    R::single(0x0DF2, 0x0DF4, L),
    R::single(0x0E01, 0x0E30, L),
    R::single(0x0E31, 0x0E31, NSM),
    R::single(0x0E32, 0x0E33, L),
    R::single(0x0E34, 0x0E3A, NSM),
    R::single(0x0E3F, 0x0E3F, ET),
    R::single(0x0E40, 0x0E46, L),
    R::single(0x0E47, 0x0E4E, NSM),
    R::single(0x0E4F, 0x0E5B, L),
    R::single(0x0E81, 0x0E82, L),
    R::single(0x0E84, 0x0E84, L),
    R::single(0x0E86, 0x0E8A, L),
    R::single(0x0E8C, 0x0EA3, L),
    R::single(0x0EA5, 0x0EA5, L),
    R::single(0x0EA7, 0x0EB0, L),
    R::single(0x0EB1, 0x0EB1, NSM),
    R::single(0x0EB2, 0x0EB3, L),
    R::single(0x0EB4, 0x0EBC, NSM),
    R::single(0x0EBD, 0x0EBD, L),
    R::single(0x0EC0, 0x0EC4, L),
    R::single(0x0EC6, 0x0EC6, L),
    R::single(0x0EC8, 0x0ECD, NSM),
    R::single(0x0ED0, 0x0ED9, L),
    R::single(0x0EDC, 0x0EDF, L),
    R::single(0x0F00, 0x0F17, L),
    R::single(0x0F18, 0x0F19, NSM),
    R::single(0x0F1A, 0x0F34, L),
    R::single(0x0F35, 0x0F35, NSM),
    R::single(0x0F36, 0x0F36, L),
    R::single(0x0F37, 0x0F37, NSM),
    R::single(0x0F38, 0x0F38, L),
    R::single(0x0F39, 0x0F39, NSM),
    R::single(0x0F3A, 0x0F3D, ON),
    R::single(0x0F3E, 0x0F47, L),
    R::single(0x0F49, 0x0F6C, L),
    R::single(0x0F71, 0x0F7E, NSM),
    R::single(0x0F7F, 0x0F7F, L),
    R::single(0x0F80, 0x0F84, NSM),
    R::single(0x0F85, 0x0F85, L),
    R::single(0x0F86, 0x0F87, NSM),
    R::single(0x0F88, 0x0F8C, L),
    R::single(0x0F8D, 0x0F97, NSM),
    R::single(0x0F99, 0x0FBC, NSM),
    R::single(0x0FBE, 0x0FC5, L),
    R::single(0x0FC6, 0x0FC6, NSM),
    R::single(0x0FC7, 0x0FCC, L),
    R::single(0x0FCE, 0x0FDA, L),
    R::single(0x1000, 0x102C, L),
    R::single(0x102D, 0x1030, NSM),
    R::single(0x1031, 0x1031, L),
    R::single(0x1032, 0x1037, NSM),
    R::single(0x1038, 0x1038, L),
    R::single(0x1039, 0x103A, NSM),
    R::single(0x103B, 0x103C, L),
    R::single(0x103D, 0x103E, NSM),
    R::single(0x103F, 0x1057, L),
    R::single(0x1058, 0x1059, NSM),
    R::single(0x105A, 0x105D, L),
    R::single(0x105E, 0x1060, NSM),
    R::single(0x1061, 0x1070, L),
    R::single(0x1071, 0x1074, NSM),
    R::single(0x1075, 0x1081, L),
    R::single(0x1082, 0x1082, NSM),
    R::single(0x1083, 0x1084, L),
    R::single(0x1085, 0x1086, NSM),
    R::single(0x1087, 0x108C, L),
    R::single(0x108D, 0x108D, NSM),
    R::single(0x108E, 0x109C, L),
    R::single(0x109D, 0x109D, NSM),
    R::single(0x109E, 0x10C5, L),
    R::single(0x10C7, 0x10C7, L),
    R::single(0x10CD, 0x10CD, L),
    R::single(0x10D0, 0x1248, L),
    R::single(0x124A, 0x124D, L),
    R::single(0x1250, 0x1256, L),
    R::single(0x1258, 0x1258, L),
    R::single(0x125A, 0x125D, L),
    R::single(0x1260, 0x1288, L),
    R::single(0x128A, 0x128D, L),
    R::single(0x1290, 0x12B0, L),
    R::single(0x12B2, 0x12B5, L),
    R::single(0x12B8, 0x12BE, L),
    R::single(0x12C0, 0x12C0, L),
    R::single(0x12C2, 0x12C5, L),
    R::single(0x12C8, 0x12D6, L),
    R::single(0x12D8, 0x1310, L),
    R::single(0x1312, 0x1315, L),
    R::single(0x1318, 0x135A, L),
    R::single(0x135D, 0x135F, NSM),
    R::single(0x1360, 0x137C, L),
    R::single(0x1380, 0x138F, L),
    R::single(0x1390, 0x1399, ON),
    R::single(0x13A0, 0x13F5, L),
    R::single(0x13F8, 0x13FD, L),
    R::single(0x1400, 0x1400, ON),
    R::single(0x1401, 0x167F, L),
    R::single(0x1680, 0x1680, WS),
    R::single(0x1681, 0x169A, L),
    R::single(0x169B, 0x169C, ON),
    R::single(0x16A0, 0x16F8, L),
    R::single(0x1700, 0x1711, L),
    R::single(0x1712, 0x1714, NSM),
    R::single(0x1715, 0x1715, L),
    R::single(0x171F, 0x1731, L),
    R::single(0x1732, 0x1733, NSM),
    R::single(0x1734, 0x1736, L),
    R::single(0x1740, 0x1751, L),
    R::single(0x1752, 0x1753, NSM),
    R::single(0x1760, 0x176C, L),
    R::single(0x176E, 0x1770, L),
    R::single(0x1772, 0x1773, NSM),
    R::single(0x1780, 0x17B3, L),
    R::single(0x17B4, 0x17B5, NSM),
    R::single(0x17B6, 0x17B6, L),
    R::single(0x17B7, 0x17BD, NSM),
    R::single(0x17BE, 0x17C5, L),
    R::single(0x17C6, 0x17C6, NSM),
    R::single(0x17C7, 0x17C8, L),
    R::single(0x17C9, 0x17D3, NSM),
    R::single(0x17D4, 0x17DA, L),
    R::single(0x17DB, 0x17DB, ET),
    R::single(0x17DC, 0x17DC, L),
    R::single(0x17DD, 0x17DD, NSM),
    R::single(0x17E0, 0x17E9, L),
    R::single(0x17F0, 0x17F9, ON),
    R::single(0x1800, 0x180A, ON),
    R::single(0x180B, 0x180D, NSM),
    R::single(0x180E, 0x180E, BN),
    R::single(0x180F, 0x180F, NSM),
    R::single(0x1810, 0x1819, L),
    R::single(0x1820, 0x1878, L),
    R::single(0x1880, 0x1884, L),
    R::single(0x1885, 0x1886, NSM),
    R::single(0x1887, 0x18A8, L),
    R::single(0x18A9, 0x18A9, NSM),
    R::single(0x18AA, 0x18AA, L),
    R::single(0x18B0, 0x18F5, L),
    R::single(0x1900, 0x191E, L),
    R::single(0x1920, 0x1922, NSM),
    R::single(0x1923, 0x1926, L),
    R::single(0x1927, 0x1928, NSM),
    R::single(0x1929, 0x192B, L),
    R::single(0x1930, 0x1931, L),
    R::single(0x1932, 0x1932, NSM),
    R::single(0x1933, 0x1938, L),
    R::single(0x1939, 0x193B, NSM),
    R::single(0x1940, 0x1940, ON),
    R::single(0x1944, 0x1945, ON),
    R::single(0x1946, 0x196D, L),
    R::single(0x1970, 0x1974, L),
    R::single(0x1980, 0x19AB, L),
    R::single(0x19B0, 0x19C9, L),
    R::single(0x19D0, 0x19DA, L),
    R::single(0x19DE, 0x19FF, ON),
    R::single(0x1A00, 0x1A16, L),
    R::single(0x1A17, 0x1A18, NSM),
    R::single(0x1A19, 0x1A1A, L),
    R::single(0x1A1B, 0x1A1B, NSM),
    R::single(0x1A1E, 0x1A55, L),
    R::single(0x1A56, 0x1A56, NSM),
    R::single(0x1A57, 0x1A57, L),
    R::single(0x1A58, 0x1A5E, NSM),
    R::single(0x1A60, 0x1A60, NSM),
    R::single(0x1A61, 0x1A61, L),
    R::single(0x1A62, 0x1A62, NSM),
    R::single(0x1A63, 0x1A64, L),
    R::single(0x1A65, 0x1A6C, NSM),
    R::single(0x1A6D, 0x1A72, L),
    R::single(0x1A73, 0x1A7C, NSM),
    R::single(0x1A7F, 0x1A7F, NSM),
    R::single(0x1A80, 0x1A89, L),
    R::single(0x1A90, 0x1A99, L),
    R::single(0x1AA0, 0x1AAD, L),
    R::single(0x1AB0, 0x1ACE, NSM),
    R::single(0x1B00, 0x1B03, NSM),
    R::single(0x1B04, 0x1B33, L),
    R::single(0x1B34, 0x1B34, NSM),
    R::single(0x1B35, 0x1B35, L),
    R::single(0x1B36, 0x1B3A, NSM),
    R::single(0x1B3B, 0x1B3B, L),
    R::single(0x1B3C, 0x1B3C, NSM),
    R::single(0x1B3D, 0x1B41, L),
    R::single(0x1B42, 0x1B42, NSM),
    R::single(0x1B43, 0x1B4C, L),
    R::single(0x1B50, 0x1B6A, L),
    R::single(0x1B6B, 0x1B73, NSM),
    R::single(0x1B74, 0x1B7E, L),
    R::single(0x1B80, 0x1B81, NSM),
    R::single(0x1B82, 0x1BA1, L),
    R::single(0x1BA2, 0x1BA5, NSM),
    R::single(0x1BA6, 0x1BA7, L),
    R::single(0x1BA8, 0x1BA9, NSM),
    R::single(0x1BAA, 0x1BAA, L),
    R::single(0x1BAB, 0x1BAD, NSM),
    R::single(0x1BAE, 0x1BE5, L),
    R::single(0x1BE6, 0x1BE6, NSM),
    R::single(0x1BE7, 0x1BE7, L),
    R::single(0x1BE8, 0x1BE9, NSM),
    R::single(0x1BEA, 0x1BEC, L),
    R::single(0x1BED, 0x1BED, NSM),
    R::single(0x1BEE, 0x1BEE, L),
    R::single(0x1BEF, 0x1BF1, NSM),
    R::single(0x1BF2, 0x1BF3, L),
    R::single(0x1BFC, 0x1C2B, L),
    R::single(0x1C2C, 0x1C33, NSM),
    R::single(0x1C34, 0x1C35, L),
    R::single(0x1C36, 0x1C37, NSM),
    R::single(0x1C3B, 0x1C49, L),
    R::single(0x1C4D, 0x1C88, L),
    R::single(0x1C90, 0x1CBA, L),
    R::single(0x1CBD, 0x1CC7, L),
    R::single(0x1CD0, 0x1CD2, NSM),
    R::single(0x1CD3, 0x1CD3, L),
    R::single(0x1CD4, 0x1CE0, NSM),
    R::single(0x1CE1, 0x1CE1, L),
    R::single(0x1CE2, 0x1CE8, NSM),
    R::single(0x1CE9, 0x1CEC, L),
    R::single(0x1CED, 0x1CED, NSM),
    R::single(0x1CEE, 0x1CF3, L),
    R::single(0x1CF4, 0x1CF4, NSM),
    R::single(0x1CF5, 0x1CF7, L),
    R::single(0x1CF8, 0x1CF9, NSM),
    R::single(0x1CFA, 0x1CFA, L),
    R::single(0x1D00, 0x1DBF, L),
    R::single(0x1DC0, 0x1DFF, NSM),
    R::single(0x1E00, 0x1F15, L),
    R::single(0x1F18, 0x1F1D, L),
    R::single(0x1F20, 0x1F45, L),
    R::single(0x1F48, 0x1F4D, L),
    R::single(0x1F50, 0x1F57, L),
    R::single(0x1F59, 0x1F59, L),
    R::single(0x1F5B, 0x1F5B, L),
    R::single(0x1F5D, 0x1F5D, L),
    R::single(0x1F5F, 0x1F7D, L),
    R::single(0x1F80, 0x1FB4, L),
    R::single(0x1FB6, 0x1FBC, L),
    R::single(0x1FBD, 0x1FBD, ON),
    R::single(0x1FBE, 0x1FBE, L),
    R::single(0x1FBF, 0x1FC1, ON),
    R::single(0x1FC2, 0x1FC4, L),
    R::single(0x1FC6, 0x1FCC, L),
    R::single(0x1FCD, 0x1FCF, ON),
    R::single(0x1FD0, 0x1FD3, L),
    R::single(0x1FD6, 0x1FDB, L),
    R::single(0x1FDD, 0x1FDF, ON),
    R::single(0x1FE0, 0x1FEC, L),
    R::single(0x1FED, 0x1FEF, ON),
    R::single(0x1FF2, 0x1FF4, L),
    R::single(0x1FF6, 0x1FFC, L),
    R::single(0x1FFD, 0x1FFE, ON),
    R::single(0x2000, 0x200A, WS),
    R::single(0x200B, 0x200D, BN),
    R::single(0x200E, 0x200E, L),
    R::single(0x200F, 0x200F, RTL),
    R::single(0x2010, 0x2027, ON),
    R::single(0x2028, 0x2028, WS),
    R::single(0x2029, 0x2029, B),
    R::single(0x202A, 0x202A, LRE),
    R::single(0x202B, 0x202B, RLE),
    R::single(0x202C, 0x202C, PDF),
    R::single(0x202D, 0x202D, LRO),
    R::single(0x202E, 0x202E, RLO),
    R::single(0x202F, 0x202F, CS),
    R::single(0x2030, 0x2034, ET),
    R::single(0x2035, 0x2043, ON),
    R::single(0x2044, 0x2044, CS),
    R::single(0x2045, 0x205E, ON),
    R::single(0x205F, 0x205F, WS),
    R::single(0x2060, 0x2064, BN),
    R::single(0x2066, 0x2066, LRI),
    R::single(0x2067, 0x2067, RLI),
    R::single(0x2068, 0x2068, FSI),
    R::single(0x2069, 0x2069, PDI),
    R::single(0x206A, 0x206F, BN),
    R::single(0x2070, 0x2070, EN),
    R::single(0x2071, 0x2071, L),
    R::single(0x2074, 0x2079, EN),
    R::single(0x207A, 0x207B, ES),
    R::single(0x207C, 0x207E, ON),
    R::single(0x207F, 0x207F, L),
    R::single(0x2080, 0x2089, EN),
    R::single(0x208A, 0x208B, ES),
    R::single(0x208C, 0x208E, ON),
    R::single(0x2090, 0x209C, L),
    R::single(0x20A0, 0x20C0, ET),
    R::single(0x20D0, 0x20F0, NSM),
    R::single(0x2100, 0x2101, ON),
    R::single(0x2102, 0x2102, L),
    R::single(0x2103, 0x2106, ON),
    R::single(0x2107, 0x2107, L),
    R::single(0x2108, 0x2109, ON),
    R::single(0x210A, 0x2113, L),
    R::single(0x2114, 0x2114, ON),
    R::single(0x2115, 0x2115, L),
    R::single(0x2116, 0x2118, ON),
    R::single(0x2119, 0x211D, L),
    R::single(0x211E, 0x2123, ON),
    R::single(0x2124, 0x2124, L),
    R::single(0x2125, 0x2125, ON),
    R::single(0x2126, 0x2126, L),
    R::single(0x2127, 0x2127, ON),
    R::single(0x2128, 0x2128, L),
    R::single(0x2129, 0x2129, ON),
    R::single(0x212A, 0x212D, L),
    R::single(0x212E, 0x212E, ET),
    R::single(0x212F, 0x2139, L),
    R::single(0x213A, 0x213B, ON),
    R::single(0x213C, 0x213F, L),
    R::single(0x2140, 0x2144, ON),
    R::single(0x2145, 0x2149, L),
    R::single(0x214A, 0x214D, ON),
    R::single(0x214E, 0x214F, L),
    R::single(0x2150, 0x215F, ON),
    R::single(0x2160, 0x2188, L),
    R::single(0x2189, 0x218B, ON),
    R::single(0x2190, 0x2211, ON),
    R::single(0x2212, 0x2212, ES),
    R::single(0x2213, 0x2213, ET),
    R::single(0x2214, 0x2335, ON),
    R::single(0x2336, 0x237A, L),
    R::single(0x237B, 0x2394, ON),
    R::single(0x2395, 0x2395, L),
    R::single(0x2396, 0x2426, ON),
    R::single(0x2440, 0x244A, ON),
    R::single(0x2460, 0x2487, ON),
    R::single(0x2488, 0x249B, EN),
    R::single(0x249C, 0x24E9, L),
    R::single(0x24EA, 0x26AB, ON),
    R::single(0x26AC, 0x26AC, L),
    R::single(0x26AD, 0x27FF, ON),
    R::single(0x2800, 0x28FF, L),
    R::single(0x2900, 0x2B73, ON),
    R::single(0x2B76, 0x2B95, ON),
    R::single(0x2B97, 0x2BFF, ON),
    R::single(0x2C00, 0x2CE4, L),
    R::single(0x2CE5, 0x2CEA, ON),
    R::single(0x2CEB, 0x2CEE, L),
    R::single(0x2CEF, 0x2CF1, NSM),
    R::single(0x2CF2, 0x2CF3, L),
    R::single(0x2CF9, 0x2CFF, ON),
    R::single(0x2D00, 0x2D25, L),
    R::single(0x2D27, 0x2D27, L),
    R::single(0x2D2D, 0x2D2D, L),
    R::single(0x2D30, 0x2D67, L),
    R::single(0x2D6F, 0x2D70, L),
    R::single(0x2D7F, 0x2D7F, NSM),
    R::single(0x2D80, 0x2D96, L),
    R::single(0x2DA0, 0x2DA6, L),
    R::single(0x2DA8, 0x2DAE, L),
    R::single(0x2DB0, 0x2DB6, L),
    R::single(0x2DB8, 0x2DBE, L),
    R::single(0x2DC0, 0x2DC6, L),
    R::single(0x2DC8, 0x2DCE, L),
    R::single(0x2DD0, 0x2DD6, L),
    R::single(0x2DD8, 0x2DDE, L),
    R::single(0x2DE0, 0x2DFF, NSM),
    R::single(0x2E00, 0x2E5D, ON),
    R::single(0x2E80, 0x2E99, ON),
    R::single(0x2E9B, 0x2EF3, ON),
    R::single(0x2F00, 0x2FD5, ON),
    R::single(0x2FF0, 0x2FFB, ON),
    R::single(0x3000, 0x3000, WS),
    R::single(0x3001, 0x3004, ON),
    R::single(0x3005, 0x3007, L),
    R::single(0x3008, 0x3020, ON),
    R::single(0x3021, 0x3029, L),
    R::single(0x302A, 0x302D, NSM),
    R::single(0x302E, 0x302F, L),
    R::single(0x3030, 0x3030, ON),
    R::single(0x3031, 0x3035, L),
    R::single(0x3036, 0x3037, ON),
    R::single(0x3038, 0x303C, L),
    R::single(0x303D, 0x303F, ON),
    R::single(0x3041, 0x3096, L),
    R::single(0x3099, 0x309A, NSM),
    R::single(0x309B, 0x309C, ON),
    R::single(0x309D, 0x309F, L),
    R::single(0x30A0, 0x30A0, ON),
    R::single(0x30A1, 0x30FA, L),
    R::single(0x30FB, 0x30FB, ON),
    R::single(0x30FC, 0x30FF, L),
    R::single(0x3105, 0x312F, L),
    R::single(0x3131, 0x318E, L),
    R::single(0x3190, 0x31BF, L),
    R::single(0x31C0, 0x31E3, ON),
    R::single(0x31F0, 0x321C, L),
    R::single(0x321D, 0x321E, ON),
    R::single(0x3220, 0x324F, L),
    R::single(0x3250, 0x325F, ON),
    R::single(0x3260, 0x327B, L),
    R::single(0x327C, 0x327E, ON),
    R::single(0x327F, 0x32B0, L),
    R::single(0x32B1, 0x32BF, ON),
    R::single(0x32C0, 0x32CB, L),
    R::single(0x32CC, 0x32CF, ON),
    R::single(0x32D0, 0x3376, L),
    R::single(0x3377, 0x337A, ON),
    R::single(0x337B, 0x33DD, L),
    R::single(0x33DE, 0x33DF, ON),
    R::single(0x33E0, 0x33FE, L),
    R::single(0x33FF, 0x33FF, ON),
    R::single(0x3400, 0x4DBF, L),
    R::single(0x4DC0, 0x4DFF, ON),
    R::single(0x4E00, 0xA48C, L),
    R::single(0xA490, 0xA4C6, ON),
    R::single(0xA4D0, 0xA60C, L),
    R::single(0xA60D, 0xA60F, ON),
    R::single(0xA610, 0xA62B, L),
    R::single(0xA640, 0xA66E, L),
    R::single(0xA66F, 0xA672, NSM),
    R::single(0xA673, 0xA673, ON),
    R::single(0xA674, 0xA67D, NSM),
    R::single(0xA67E, 0xA67F, ON),
    R::single(0xA680, 0xA69D, L),
    R::single(0xA69E, 0xA69F, NSM),
    R::single(0xA6A0, 0xA6EF, L),
    R::single(0xA6F0, 0xA6F1, NSM),
    R::single(0xA6F2, 0xA6F7, L),
    R::single(0xA700, 0xA721, ON),
    R::single(0xA722, 0xA787, L),
    R::single(0xA788, 0xA788, ON),
    R::single(0xA789, 0xA7CA, L),
    R::single(0xA7D0, 0xA7D1, L),
    R::single(0xA7D3, 0xA7D3, L),
    R::single(0xA7D5, 0xA7D9, L),
    R::single(0xA7F2, 0xA801, L),
    R::single(0xA802, 0xA802, NSM),
    R::single(0xA803, 0xA805, L),
    R::single(0xA806, 0xA806, NSM),
    R::single(0xA807, 0xA80A, L),
    R::single(0xA80B, 0xA80B, NSM),
    R::single(0xA80C, 0xA824, L),
    R::single(0xA825, 0xA826, NSM),
    R::single(0xA827, 0xA827, L),
    R::single(0xA828, 0xA82B, ON),
    R::single(0xA82C, 0xA82C, NSM),
    R::single(0xA830, 0xA837, L),
    R::single(0xA838, 0xA839, ET),
    R::single(0xA840, 0xA873, L),
    R::single(0xA874, 0xA877, ON),
    R::single(0xA880, 0xA8C3, L),
    R::single(0xA8C4, 0xA8C5, NSM),
    R::single(0xA8CE, 0xA8D9, L),
    R::single(0xA8E0, 0xA8F1, NSM),
    R::single(0xA8F2, 0xA8FE, L),
    R::single(0xA8FF, 0xA8FF, NSM),
    R::single(0xA900, 0xA925, L),
    R::single(0xA926, 0xA92D, NSM),
    R::single(0xA92E, 0xA946, L),
    R::single(0xA947, 0xA951, NSM),
    R::single(0xA952, 0xA953, L),
    R::single(0xA95F, 0xA97C, L),
    R::single(0xA980, 0xA982, NSM),
    R::single(0xA983, 0xA9B2, L),
    R::single(0xA9B3, 0xA9B3, NSM),
    R::single(0xA9B4, 0xA9B5, L),
    R::single(0xA9B6, 0xA9B9, NSM),
    R::single(0xA9BA, 0xA9BB, L),
    R::single(0xA9BC, 0xA9BD, NSM),
    R::single(0xA9BE, 0xA9CD, L),
    R::single(0xA9CF, 0xA9D9, L),
    R::single(0xA9DE, 0xA9E4, L),
    R::single(0xA9E5, 0xA9E5, NSM),
    R::single(0xA9E6, 0xA9FE, L),
    R::single(0xAA00, 0xAA28, L),
    R::single(0xAA29, 0xAA2E, NSM),
    R::single(0xAA2F, 0xAA30, L),
    R::single(0xAA31, 0xAA32, NSM),
    R::single(0xAA33, 0xAA34, L),
    R::single(0xAA35, 0xAA36, NSM),
    R::single(0xAA40, 0xAA42, L),
    R::single(0xAA43, 0xAA43, NSM),
    R::single(0xAA44, 0xAA4B, L),
    R::single(0xAA4C, 0xAA4C, NSM),
    R::single(0xAA4D, 0xAA4D, L),
    R::single(0xAA50, 0xAA59, L),
    R::single(0xAA5C, 0xAA7B, L),
    R::single(0xAA7C, 0xAA7C, NSM),
    R::single(0xAA7D, 0xAAAF, L),
    R::single(0xAAB0, 0xAAB0, NSM),
    R::single(0xAAB1, 0xAAB1, L),
    R::single(0xAAB2, 0xAAB4, NSM),
    R::single(0xAAB5, 0xAAB6, L),
    R::single(0xAAB7, 0xAAB8, NSM),
    R::single(0xAAB9, 0xAABD, L),
    R::single(0xAABE, 0xAABF, NSM),
    R::single(0xAAC0, 0xAAC0, L),
    R::single(0xAAC1, 0xAAC1, NSM),
    R::single(0xAAC2, 0xAAC2, L),
    R::single(0xAADB, 0xAAEB, L),
    R::single(0xAAEC, 0xAAED, NSM),
    R::single(0xAAEE, 0xAAF5, L),
    R::single(0xAAF6, 0xAAF6, NSM),
    R::single(0xAB01, 0xAB06, L),
    R::single(0xAB09, 0xAB0E, L),
    R::single(0xAB11, 0xAB16, L),
    R::single(0xAB20, 0xAB26, L),
    R::single(0xAB28, 0xAB2E, L),
    R::single(0xAB30, 0xAB69, L),
    R::single(0xAB6A, 0xAB6B, ON),
    R::single(0xAB70, 0xABE4, L),
    R::single(0xABE5, 0xABE5, NSM),
    R::single(0xABE6, 0xABE7, L),
    R::single(0xABE8, 0xABE8, NSM),
    R::single(0xABE9, 0xABEC, L),
    R::single(0xABED, 0xABED, NSM),
    R::single(0xABF0, 0xABF9, L),
    R::single(0xAC00, 0xD7A3, L),
    R::single(0xD7B0, 0xD7C6, L),
    R::single(0xD7CB, 0xD7FB, L),
    R::single(0xD800, 0xFA6D, L),
    R::single(0xFA70, 0xFAD9, L),
    R::single(0xFB00, 0xFB06, L),
    R::single(0xFB13, 0xFB17, L),
    R::single(0xFB1D, 0xFB1D, RTL),
    R::single(0xFB1E, 0xFB1E, NSM),
    R::single(0xFB1F, 0xFB28, RTL),
    R::single(0xFB29, 0xFB29, ES),
    R::single(0xFB2A, 0xFB36, RTL),
    R::single(0xFB38, 0xFB3C, RTL),
    R::single(0xFB3E, 0xFB3E, RTL),
    R::single(0xFB40, 0xFB41, RTL),
    R::single(0xFB43, 0xFB44, RTL),
    R::single(0xFB46, 0xFB4F, RTL),
    R::single(0xFB50, 0xFBC2, AL),
    R::single(0xFBD3, 0xFD3D, AL),
    R::single(0xFD3E, 0xFD4F, ON),
    R::single(0xFD50, 0xFD8F, AL),
    R::single(0xFD92, 0xFDC7, AL),
    R::single(0xFDCF, 0xFDCF, ON),
    R::single(0xFDF0, 0xFDFC, AL),
    R::single(0xFDFD, 0xFDFF, ON),
    R::single(0xFE00, 0xFE0F, NSM),
    R::single(0xFE10, 0xFE19, ON),
    R::single(0xFE20, 0xFE2F, NSM),
    R::single(0xFE30, 0xFE4F, ON),
    R::single(0xFE50, 0xFE50, CS),
    R::single(0xFE51, 0xFE51, ON),
    R::single(0xFE52, 0xFE52, CS),
    R::single(0xFE54, 0xFE54, ON),
    R::single(0xFE55, 0xFE55, CS),
    R::single(0xFE56, 0xFE5E, ON),
    R::single(0xFE5F, 0xFE5F, ET),
    R::single(0xFE60, 0xFE61, ON),
    R::single(0xFE62, 0xFE63, ES),
    R::single(0xFE64, 0xFE66, ON),
    R::single(0xFE68, 0xFE68, ON),
    R::single(0xFE69, 0xFE6A, ET),
    R::single(0xFE6B, 0xFE6B, ON),
    R::single(0xFE70, 0xFE74, AL),
    R::single(0xFE76, 0xFEFC, AL),
    R::single(0xFEFF, 0xFEFF, BN),
    R::single(0xFF01, 0xFF02, ON),
    R::single(0xFF03, 0xFF05, ET),
    R::single(0xFF06, 0xFF0A, ON),
    R::single(0xFF0B, 0xFF0B, ES),
    R::single(0xFF0C, 0xFF0C, CS),
    R::single(0xFF0D, 0xFF0D, ES),
    R::single(0xFF0E, 0xFF0F, CS),
    R::single(0xFF10, 0xFF19, EN),
    R::single(0xFF1A, 0xFF1A, CS),
    R::single(0xFF1B, 0xFF20, ON),
    R::single(0xFF21, 0xFF3A, L),
    R::single(0xFF3B, 0xFF40, ON),
    R::single(0xFF41, 0xFF5A, L),
    R::single(0xFF5B, 0xFF65, ON),
    R::single(0xFF66, 0xFFBE, L),
    R::single(0xFFC2, 0xFFC7, L),
    R::single(0xFFCA, 0xFFCF, L),
    R::single(0xFFD2, 0xFFD7, L),
    R::single(0xFFDA, 0xFFDC, L),
    R::single(0xFFE0, 0xFFE1, ET),
    R::single(0xFFE2, 0xFFE4, ON),
    R::single(0xFFE5, 0xFFE6, ET),
    R::single(0xFFE8, 0xFFEE, ON),
    R::single(0xFFF9, 0xFFFD, ON),
    R::single(0x10000, 0x1000B, L),
    R::single(0x1000D, 0x10026, L),
    R::single(0x10028, 0x1003A, L),
    R::single(0x1003C, 0x1003D, L),
    R::single(0x1003F, 0x1004D, L),
    R::single(0x10050, 0x1005D, L),
    R::single(0x10080, 0x100FA, L),
    R::single(0x10100, 0x10100, L),
    R::single(0x10101, 0x10101, ON),
    R::single(0x10102, 0x10102, L),
    R::single(0x10107, 0x10133, L),
    R::single(0x10137, 0x1013F, L),
    R::single(0x10140, 0x1018C, ON),
    R::single(0x1018D, 0x1018E, L),
    R::single(0x10190, 0x1019C, ON),
    R::single(0x101A0, 0x101A0, ON),
    R::single(0x101D0, 0x101FC, L),
    R::single(0x101FD, 0x101FD, NSM),
    R::single(0x10280, 0x1029C, L),
    R::single(0x102A0, 0x102D0, L),
    R::single(0x102E0, 0x102E0, NSM),
    R::single(0x102E1, 0x102FB, EN),
    R::single(0x10300, 0x10323, L),
    R::single(0x1032D, 0x1034A, L),
    R::single(0x10350, 0x10375, L),
    R::single(0x10376, 0x1037A, NSM),
    R::single(0x10380, 0x1039D, L),
    R::single(0x1039F, 0x103C3, L),
    R::single(0x103C8, 0x103D5, L),
    R::single(0x10400, 0x1049D, L),
    R::single(0x104A0, 0x104A9, L),
    R::single(0x104B0, 0x104D3, L),
    R::single(0x104D8, 0x104FB, L),
    R::single(0x10500, 0x10527, L),
    R::single(0x10530, 0x10563, L),
    R::single(0x1056F, 0x1057A, L),
    R::single(0x1057C, 0x1058A, L),
    R::single(0x1058C, 0x10592, L),
    R::single(0x10594, 0x10595, L),
    R::single(0x10597, 0x105A1, L),
    R::single(0x105A3, 0x105B1, L),
    R::single(0x105B3, 0x105B9, L),
    R::single(0x105BB, 0x105BC, L),
    R::single(0x10600, 0x10736, L),
    R::single(0x10740, 0x10755, L),
    R::single(0x10760, 0x10767, L),
    R::single(0x10780, 0x10785, L),
    R::single(0x10787, 0x107B0, L),
    R::single(0x107B2, 0x107BA, L),
    R::single(0x10800, 0x10805, RTL),
    R::single(0x10808, 0x10808, RTL),
    R::single(0x1080A, 0x10835, RTL),
    R::single(0x10837, 0x10838, RTL),
    R::single(0x1083C, 0x1083C, RTL),
    R::single(0x1083F, 0x10855, RTL),
    R::single(0x10857, 0x1089E, RTL),
    R::single(0x108A7, 0x108AF, RTL),
    R::single(0x108E0, 0x108F2, RTL),
    R::single(0x108F4, 0x108F5, RTL),
    R::single(0x108FB, 0x1091B, RTL),
    R::single(0x1091F, 0x1091F, ON),
    R::single(0x10920, 0x10939, RTL),
    R::single(0x1093F, 0x1093F, RTL),
    R::single(0x10980, 0x109B7, RTL),
    R::single(0x109BC, 0x109CF, RTL),
    R::single(0x109D2, 0x10A00, RTL),
    R::single(0x10A01, 0x10A03, NSM),
    R::single(0x10A05, 0x10A06, NSM),
    R::single(0x10A0C, 0x10A0F, NSM),
    R::single(0x10A10, 0x10A13, RTL),
    R::single(0x10A15, 0x10A17, RTL),
    R::single(0x10A19, 0x10A35, RTL),
    R::single(0x10A38, 0x10A3A, NSM),
    R::single(0x10A3F, 0x10A3F, NSM),
    R::single(0x10A40, 0x10A48, RTL),
    R::single(0x10A50, 0x10A58, RTL),
    R::single(0x10A60, 0x10A9F, RTL),
    R::single(0x10AC0, 0x10AE4, RTL),
    R::single(0x10AE5, 0x10AE6, NSM),
    R::single(0x10AEB, 0x10AF6, RTL),
    R::single(0x10B00, 0x10B35, RTL),
    R::single(0x10B39, 0x10B3F, ON),
    R::single(0x10B40, 0x10B55, RTL),
    R::single(0x10B58, 0x10B72, RTL),
    R::single(0x10B78, 0x10B91, RTL),
    R::single(0x10B99, 0x10B9C, RTL),
    R::single(0x10BA9, 0x10BAF, RTL),
    R::single(0x10C00, 0x10C48, RTL),
    R::single(0x10C80, 0x10CB2, RTL),
    R::single(0x10CC0, 0x10CF2, RTL),
    R::single(0x10CFA, 0x10CFF, RTL),
    R::single(0x10D00, 0x10D23, AL),
    R::single(0x10D24, 0x10D27, NSM),
    R::single(0x10D30, 0x10D39, AN),
    R::single(0x10E60, 0x10E7E, AN),
    R::single(0x10E80, 0x10EA9, RTL),
    R::single(0x10EAB, 0x10EAC, NSM),
    R::single(0x10EAD, 0x10EAD, RTL),
    R::single(0x10EB0, 0x10EB1, RTL),
    R::single(0x10F00, 0x10F27, RTL),
    R::single(0x10F30, 0x10F45, AL),
    R::single(0x10F46, 0x10F50, NSM),
    R::single(0x10F51, 0x10F59, AL),
    R::single(0x10F70, 0x10F81, RTL),
    R::single(0x10F82, 0x10F85, NSM),
    R::single(0x10F86, 0x10F89, RTL),
    R::single(0x10FB0, 0x10FCB, RTL),
    R::single(0x10FE0, 0x10FF6, RTL),
    R::single(0x11000, 0x11000, L),
    R::single(0x11001, 0x11001, NSM),
    R::single(0x11002, 0x11037, L),
    R::single(0x11038, 0x11046, NSM),
    R::single(0x11047, 0x1104D, L),
    R::single(0x11052, 0x11065, ON),
    R::single(0x11066, 0x1106F, L),
    R::single(0x11070, 0x11070, NSM),
    R::single(0x11071, 0x11072, L),
    R::single(0x11073, 0x11074, NSM),
    R::single(0x11075, 0x11075, L),
    R::single(0x1107F, 0x11081, NSM),
    R::single(0x11082, 0x110B2, L),
    R::single(0x110B3, 0x110B6, NSM),
    R::single(0x110B7, 0x110B8, L),
    R::single(0x110B9, 0x110BA, NSM),
    R::single(0x110BB, 0x110C1, L),
    R::single(0x110C2, 0x110C2, NSM),
    R::single(0x110CD, 0x110CD, L),
    R::single(0x110D0, 0x110E8, L),
    R::single(0x110F0, 0x110F9, L),
    R::single(0x11100, 0x11102, NSM),
    R::single(0x11103, 0x11126, L),
    R::single(0x11127, 0x1112B, NSM),
    R::single(0x1112C, 0x1112C, L),
    R::single(0x1112D, 0x11134, NSM),
    R::single(0x11136, 0x11147, L),
    R::single(0x11150, 0x11172, L),
    R::single(0x11173, 0x11173, NSM),
    R::single(0x11174, 0x11176, L),
    R::single(0x11180, 0x11181, NSM),
    R::single(0x11182, 0x111B5, L),
    R::single(0x111B6, 0x111BE, NSM),
    R::single(0x111BF, 0x111C8, L),
    R::single(0x111C9, 0x111CC, NSM),
    R::single(0x111CD, 0x111CE, L),
    R::single(0x111CF, 0x111CF, NSM),
    R::single(0x111D0, 0x111DF, L),
    R::single(0x111E1, 0x111F4, L),
    R::single(0x11200, 0x11211, L),
    R::single(0x11213, 0x1122E, L),
    R::single(0x1122F, 0x11231, NSM),
    R::single(0x11232, 0x11233, L),
    R::single(0x11234, 0x11234, NSM),
    R::single(0x11235, 0x11235, L),
    R::single(0x11236, 0x11237, NSM),
    R::single(0x11238, 0x1123D, L),
    R::single(0x1123E, 0x1123E, NSM),
    R::single(0x11280, 0x11286, L),
    R::single(0x11288, 0x11288, L),
    R::single(0x1128A, 0x1128D, L),
    R::single(0x1128F, 0x1129D, L),
    R::single(0x1129F, 0x112A9, L),
    R::single(0x112B0, 0x112DE, L),
    R::single(0x112DF, 0x112DF, NSM),
    R::single(0x112E0, 0x112E2, L),
    R::single(0x112E3, 0x112EA, NSM),
    R::single(0x112F0, 0x112F9, L),
    R::single(0x11300, 0x11301, NSM),
    R::single(0x11302, 0x11303, L),
    R::single(0x11305, 0x1130C, L),
    R::single(0x1130F, 0x11310, L),
    R::single(0x11313, 0x11328, L),
    R::single(0x1132A, 0x11330, L),
    R::single(0x11332, 0x11333, L),
    R::single(0x11335, 0x11339, L),
    R::single(0x1133B, 0x1133C, NSM),
    R::single(0x1133D, 0x1133F, L),
    R::single(0x11340, 0x11340, NSM),
    R::single(0x11341, 0x11344, L),
    R::single(0x11347, 0x11348, L),
    R::single(0x1134B, 0x1134D, L),
    R::single(0x11350, 0x11350, L),
    R::single(0x11357, 0x11357, L),
    R::single(0x1135D, 0x11363, L),
    R::single(0x11366, 0x1136C, NSM),
    R::single(0x11370, 0x11374, NSM),
    R::single(0x11400, 0x11437, L),
    R::single(0x11438, 0x1143F, NSM),
    R::single(0x11440, 0x11441, L),
    R::single(0x11442, 0x11444, NSM),
    R::single(0x11445, 0x11445, L),
    R::single(0x11446, 0x11446, NSM),
    R::single(0x11447, 0x1145B, L),
    R::single(0x1145D, 0x1145D, L),
    R::single(0x1145E, 0x1145E, NSM),
    R::single(0x1145F, 0x11461, L),
    R::single(0x11480, 0x114B2, L),
    R::single(0x114B3, 0x114B8, NSM),
    R::single(0x114B9, 0x114B9, L),
    R::single(0x114BA, 0x114BA, NSM),
    R::single(0x114BB, 0x114BE, L),
    R::single(0x114BF, 0x114C0, NSM),
    R::single(0x114C1, 0x114C1, L),
    R::single(0x114C2, 0x114C3, NSM),
    R::single(0x114C4, 0x114C7, L),
    R::single(0x114D0, 0x114D9, L),
    R::single(0x11580, 0x115B1, L),
    R::single(0x115B2, 0x115B5, NSM),
    R::single(0x115B8, 0x115BB, L),
    R::single(0x115BC, 0x115BD, NSM),
    R::single(0x115BE, 0x115BE, L),
    R::single(0x115BF, 0x115C0, NSM),
    R::single(0x115C1, 0x115DB, L),
    R::single(0x115DC, 0x115DD, NSM),
    R::single(0x11600, 0x11632, L),
    R::single(0x11633, 0x1163A, NSM),
    R::single(0x1163B, 0x1163C, L),
    R::single(0x1163D, 0x1163D, NSM),
    R::single(0x1163E, 0x1163E, L),
    R::single(0x1163F, 0x11640, NSM),
    R::single(0x11641, 0x11644, L),
    R::single(0x11650, 0x11659, L),
    R::single(0x11660, 0x1166C, ON),
    R::single(0x11680, 0x116AA, L),
    R::single(0x116AB, 0x116AB, NSM),
    R::single(0x116AC, 0x116AC, L),
    R::single(0x116AD, 0x116AD, NSM),
    R::single(0x116AE, 0x116AF, L),
    R::single(0x116B0, 0x116B5, NSM),
    R::single(0x116B6, 0x116B6, L),
    R::single(0x116B7, 0x116B7, NSM),
    R::single(0x116B8, 0x116B9, L),
    R::single(0x116C0, 0x116C9, L),
    R::single(0x11700, 0x1171A, L),
    R::single(0x1171D, 0x1171F, NSM),
    R::single(0x11720, 0x11721, L),
    R::single(0x11722, 0x11725, NSM),
    R::single(0x11726, 0x11726, L),
    R::single(0x11727, 0x1172B, NSM),
    R::single(0x11730, 0x11746, L),
    R::single(0x11800, 0x1182E, L),
    R::single(0x1182F, 0x11837, NSM),
    R::single(0x11838, 0x11838, L),
    R::single(0x11839, 0x1183A, NSM),
    R::single(0x1183B, 0x1183B, L),
    R::single(0x118A0, 0x118F2, L),
    R::single(0x118FF, 0x11906, L),
    R::single(0x11909, 0x11909, L),
    R::single(0x1190C, 0x11913, L),
    R::single(0x11915, 0x11916, L),
    R::single(0x11918, 0x11935, L),
    R::single(0x11937, 0x11938, L),
    R::single(0x1193B, 0x1193C, NSM),
    R::single(0x1193D, 0x1193D, L),
    R::single(0x1193E, 0x1193E, NSM),
    R::single(0x1193F, 0x11942, L),
    R::single(0x11943, 0x11943, NSM),
    R::single(0x11944, 0x11946, L),
    R::single(0x11950, 0x11959, L),
    R::single(0x119A0, 0x119A7, L),
    R::single(0x119AA, 0x119D3, L),
    R::single(0x119D4, 0x119D7, NSM),
    R::single(0x119DA, 0x119DB, NSM),
    R::single(0x119DC, 0x119DF, L),
    R::single(0x119E0, 0x119E0, NSM),
    R::single(0x119E1, 0x119E4, L),
    R::single(0x11A00, 0x11A00, L),
    R::single(0x11A01, 0x11A06, NSM),
    R::single(0x11A07, 0x11A08, L),
    R::single(0x11A09, 0x11A0A, NSM),
    R::single(0x11A0B, 0x11A32, L),
    R::single(0x11A33, 0x11A38, NSM),
    R::single(0x11A39, 0x11A3A, L),
    R::single(0x11A3B, 0x11A3E, NSM),
    R::single(0x11A3F, 0x11A46, L),
    R::single(0x11A47, 0x11A47, NSM),
    R::single(0x11A50, 0x11A50, L),
    R::single(0x11A51, 0x11A56, NSM),
    R::single(0x11A57, 0x11A58, L),
    R::single(0x11A59, 0x11A5B, NSM),
    R::single(0x11A5C, 0x11A89, L),
    R::single(0x11A8A, 0x11A96, NSM),
    R::single(0x11A97, 0x11A97, L),
    R::single(0x11A98, 0x11A99, NSM),
    R::single(0x11A9A, 0x11AA2, L),
    R::single(0x11AB0, 0x11AF8, L),
    R::single(0x11C00, 0x11C08, L),
    R::single(0x11C0A, 0x11C2F, L),
    R::single(0x11C30, 0x11C36, NSM),
    R::single(0x11C38, 0x11C3D, NSM),
    R::single(0x11C3E, 0x11C45, L),
    R::single(0x11C50, 0x11C6C, L),
    R::single(0x11C70, 0x11C8F, L),
    R::single(0x11C92, 0x11CA7, NSM),
    R::single(0x11CA9, 0x11CA9, L),
    R::single(0x11CAA, 0x11CB0, NSM),
    R::single(0x11CB1, 0x11CB1, L),
    R::single(0x11CB2, 0x11CB3, NSM),
    R::single(0x11CB4, 0x11CB4, L),
    R::single(0x11CB5, 0x11CB6, NSM),
    R::single(0x11D00, 0x11D06, L),
    R::single(0x11D08, 0x11D09, L),
    R::single(0x11D0B, 0x11D30, L),
    R::single(0x11D31, 0x11D36, NSM),
    R::single(0x11D3A, 0x11D3A, NSM),
    R::single(0x11D3C, 0x11D3D, NSM),
    R::single(0x11D3F, 0x11D45, NSM),
    R::single(0x11D46, 0x11D46, L),
    R::single(0x11D47, 0x11D47, NSM),
    R::single(0x11D50, 0x11D59, L),
    R::single(0x11D60, 0x11D65, L),
    R::single(0x11D67, 0x11D68, L),
    R::single(0x11D6A, 0x11D8E, L),
    R::single(0x11D90, 0x11D91, NSM),
    R::single(0x11D93, 0x11D94, L),
    R::single(0x11D95, 0x11D95, NSM),
    R::single(0x11D96, 0x11D96, L),
    R::single(0x11D97, 0x11D97, NSM),
    R::single(0x11D98, 0x11D98, L),
    R::single(0x11DA0, 0x11DA9, L),
    R::single(0x11EE0, 0x11EF2, L),
    R::single(0x11EF3, 0x11EF4, NSM),
    R::single(0x11EF5, 0x11EF8, L),
    R::single(0x11FB0, 0x11FB0, L),
    R::single(0x11FC0, 0x11FD4, L),
    R::single(0x11FD5, 0x11FDC, ON),
    R::single(0x11FDD, 0x11FE0, ET),
    R::single(0x11FE1, 0x11FF1, ON),
    R::single(0x11FFF, 0x12399, L),
    R::single(0x12400, 0x1246E, L),
    R::single(0x12470, 0x12474, L),
    R::single(0x12480, 0x12543, L),
    R::single(0x12F90, 0x12FF2, L),
    R::single(0x13000, 0x1342E, L),
    R::single(0x13430, 0x13438, L),
    R::single(0x14400, 0x14646, L),
    R::single(0x16800, 0x16A38, L),
    R::single(0x16A40, 0x16A5E, L),
    R::single(0x16A60, 0x16A69, L),
    R::single(0x16A6E, 0x16ABE, L),
    R::single(0x16AC0, 0x16AC9, L),
    R::single(0x16AD0, 0x16AED, L),
    R::single(0x16AF0, 0x16AF4, NSM),
    R::single(0x16AF5, 0x16AF5, L),
    R::single(0x16B00, 0x16B2F, L),
    R::single(0x16B30, 0x16B36, NSM),
    R::single(0x16B37, 0x16B45, L),
    R::single(0x16B50, 0x16B59, L),
    R::single(0x16B5B, 0x16B61, L),
    R::single(0x16B63, 0x16B77, L),
    R::single(0x16B7D, 0x16B8F, L),
    R::single(0x16E40, 0x16E9A, L),
    R::single(0x16F00, 0x16F4A, L),
    R::single(0x16F4F, 0x16F4F, NSM),
    R::single(0x16F50, 0x16F87, L),
    R::single(0x16F8F, 0x16F92, NSM),
    R::single(0x16F93, 0x16F9F, L),
    R::single(0x16FE0, 0x16FE1, L),
    R::single(0x16FE2, 0x16FE2, ON),
    R::single(0x16FE3, 0x16FE3, L),
    R::single(0x16FE4, 0x16FE4, NSM),
    R::single(0x16FF0, 0x16FF1, L),
    R::single(0x17000, 0x187F7, L),
    R::single(0x18800, 0x18CD5, L),
    R::single(0x18D00, 0x18D08, L),
    R::single(0x1AFF0, 0x1AFF3, L),
    R::single(0x1AFF5, 0x1AFFB, L),
    R::single(0x1AFFD, 0x1AFFE, L),
    R::single(0x1B000, 0x1B122, L),
    R::single(0x1B150, 0x1B152, L),
    R::single(0x1B164, 0x1B167, L),
    R::single(0x1B170, 0x1B2FB, L),
    R::single(0x1BC00, 0x1BC6A, L),
    R::single(0x1BC70, 0x1BC7C, L),
    R::single(0x1BC80, 0x1BC88, L),
    R::single(0x1BC90, 0x1BC99, L),
    R::single(0x1BC9C, 0x1BC9C, L),
    R::single(0x1BC9D, 0x1BC9E, NSM),
    R::single(0x1BC9F, 0x1BC9F, L),
    R::single(0x1BCA0, 0x1BCA3, BN),
    R::single(0x1CF00, 0x1CF2D, NSM),
    R::single(0x1CF30, 0x1CF46, NSM),
    R::single(0x1CF50, 0x1CFC3, L),
    R::single(0x1D000, 0x1D0F5, L),
    R::single(0x1D100, 0x1D126, L),
    R::single(0x1D129, 0x1D166, L),
    R::single(0x1D167, 0x1D169, NSM),
    R::single(0x1D16A, 0x1D172, L),
    R::single(0x1D173, 0x1D17A, BN),
    R::single(0x1D17B, 0x1D182, NSM),
    R::single(0x1D183, 0x1D184, L),
    R::single(0x1D185, 0x1D18B, NSM),
    R::single(0x1D18C, 0x1D1A9, L),
    R::single(0x1D1AA, 0x1D1AD, NSM),
    R::single(0x1D1AE, 0x1D1E8, L),
    R::single(0x1D1E9, 0x1D1EA, ON),
    R::single(0x1D200, 0x1D241, ON),
    R::single(0x1D242, 0x1D244, NSM),
    R::single(0x1D245, 0x1D245, ON),
    R::single(0x1D2E0, 0x1D2F3, L),
    R::single(0x1D300, 0x1D356, ON),
    R::single(0x1D360, 0x1D378, L),
    R::single(0x1D400, 0x1D454, L),
    R::single(0x1D456, 0x1D49C, L),
    R::single(0x1D49E, 0x1D49F, L),
    R::single(0x1D4A2, 0x1D4A2, L),
    R::single(0x1D4A5, 0x1D4A6, L),
    R::single(0x1D4A9, 0x1D4AC, L),
    R::single(0x1D4AE, 0x1D4B9, L),
    R::single(0x1D4BB, 0x1D4BB, L),
    R::single(0x1D4BD, 0x1D4C3, L),
    R::single(0x1D4C5, 0x1D505, L),
    R::single(0x1D507, 0x1D50A, L),
    R::single(0x1D50D, 0x1D514, L),
    R::single(0x1D516, 0x1D51C, L),
    R::single(0x1D51E, 0x1D539, L),
    R::single(0x1D53B, 0x1D53E, L),
    R::single(0x1D540, 0x1D544, L),
    R::single(0x1D546, 0x1D546, L),
    R::single(0x1D54A, 0x1D550, L),
    R::single(0x1D552, 0x1D6A5, L),
    R::single(0x1D6A8, 0x1D6DA, L),
    R::single(0x1D6DB, 0x1D6DB, ON),
    R::single(0x1D6DC, 0x1D714, L),
    R::single(0x1D715, 0x1D715, ON),
    R::single(0x1D716, 0x1D74E, L),
    R::single(0x1D74F, 0x1D74F, ON),
    R::single(0x1D750, 0x1D788, L),
    R::single(0x1D789, 0x1D789, ON),
    R::single(0x1D78A, 0x1D7C2, L),
    R::single(0x1D7C3, 0x1D7C3, ON),
    R::single(0x1D7C4, 0x1D7CB, L),
    R::single(0x1D7CE, 0x1D7FF, EN),
    R::single(0x1D800, 0x1D9FF, L),
    R::single(0x1DA00, 0x1DA36, NSM),
    R::single(0x1DA37, 0x1DA3A, L),
    R::single(0x1DA3B, 0x1DA6C, NSM),
    R::single(0x1DA6D, 0x1DA74, L),
    R::single(0x1DA75, 0x1DA75, NSM),
    R::single(0x1DA76, 0x1DA83, L),
    R::single(0x1DA84, 0x1DA84, NSM),
    R::single(0x1DA85, 0x1DA8B, L),
    R::single(0x1DA9B, 0x1DA9F, NSM),
    R::single(0x1DAA1, 0x1DAAF, NSM),
    R::single(0x1DF00, 0x1DF1E, L),
    R::single(0x1E000, 0x1E006, NSM),
    R::single(0x1E008, 0x1E018, NSM),
    R::single(0x1E01B, 0x1E021, NSM),
    R::single(0x1E023, 0x1E024, NSM),
    R::single(0x1E026, 0x1E02A, NSM),
    R::single(0x1E100, 0x1E12C, L),
    R::single(0x1E130, 0x1E136, NSM),
    R::single(0x1E137, 0x1E13D, L),
    R::single(0x1E140, 0x1E149, L),
    R::single(0x1E14E, 0x1E14F, L),
    R::single(0x1E290, 0x1E2AD, L),
    R::single(0x1E2AE, 0x1E2AE, NSM),
    R::single(0x1E2C0, 0x1E2EB, L),
    R::single(0x1E2EC, 0x1E2EF, NSM),
    R::single(0x1E2F0, 0x1E2F9, L),
    R::single(0x1E2FF, 0x1E2FF, ET),
    R::single(0x1E7E0, 0x1E7E6, L),
    R::single(0x1E7E8, 0x1E7EB, L),
    R::single(0x1E7ED, 0x1E7EE, L),
    R::single(0x1E7F0, 0x1E7FE, L),
    R::single(0x1E800, 0x1E8C4, RTL),
    R::single(0x1E8C7, 0x1E8CF, RTL),
    R::single(0x1E8D0, 0x1E8D6, NSM),
    R::single(0x1E900, 0x1E943, RTL),
    R::single(0x1E944, 0x1E94A, NSM),
    R::single(0x1E94B, 0x1E94B, RTL),
    R::single(0x1E950, 0x1E959, RTL),
    R::single(0x1E95E, 0x1E95F, RTL),
    R::single(0x1EC71, 0x1ECB4, AL),
    R::single(0x1ED01, 0x1ED3D, AL),
    R::single(0x1EE00, 0x1EE03, AL),
    R::single(0x1EE05, 0x1EE1F, AL),
    R::single(0x1EE21, 0x1EE22, AL),
    R::single(0x1EE24, 0x1EE24, AL),
    R::single(0x1EE27, 0x1EE27, AL),
    R::single(0x1EE29, 0x1EE32, AL),
    R::single(0x1EE34, 0x1EE37, AL),
    R::single(0x1EE39, 0x1EE39, AL),
    R::single(0x1EE3B, 0x1EE3B, AL),
    R::single(0x1EE42, 0x1EE42, AL),
    R::single(0x1EE47, 0x1EE47, AL),
    R::single(0x1EE49, 0x1EE49, AL),
    R::single(0x1EE4B, 0x1EE4B, AL),
    R::single(0x1EE4D, 0x1EE4F, AL),
    R::single(0x1EE51, 0x1EE52, AL),
    R::single(0x1EE54, 0x1EE54, AL),
    R::single(0x1EE57, 0x1EE57, AL),
    R::single(0x1EE59, 0x1EE59, AL),
    R::single(0x1EE5B, 0x1EE5B, AL),
    R::single(0x1EE5D, 0x1EE5D, AL),
    R::single(0x1EE5F, 0x1EE5F, AL),
    R::single(0x1EE61, 0x1EE62, AL),
    R::single(0x1EE64, 0x1EE64, AL),
    R::single(0x1EE67, 0x1EE6A, AL),
    R::single(0x1EE6C, 0x1EE72, AL),
    R::single(0x1EE74, 0x1EE77, AL),
    R::single(0x1EE79, 0x1EE7C, AL),
    R::single(0x1EE7E, 0x1EE7E, AL),
    R::single(0x1EE80, 0x1EE89, AL),
    R::single(0x1EE8B, 0x1EE9B, AL),
    R::single(0x1EEA1, 0x1EEA3, AL),
    R::single(0x1EEA5, 0x1EEA9, AL),
    R::single(0x1EEAB, 0x1EEBB, AL),
    R::single(0x1EEF0, 0x1EEF1, ON),
    R::single(0x1F000, 0x1F02B, ON),
    R::single(0x1F030, 0x1F093, ON),
    R::single(0x1F0A0, 0x1F0AE, ON),
    R::single(0x1F0B1, 0x1F0BF, ON),
    R::single(0x1F0C1, 0x1F0CF, ON),
    R::single(0x1F0D1, 0x1F0F5, ON),
    R::single(0x1F100, 0x1F10A, EN),
    R::single(0x1F10B, 0x1F10F, ON),
    R::single(0x1F110, 0x1F12E, L),
    R::single(0x1F12F, 0x1F12F, ON),
    R::single(0x1F130, 0x1F169, L),
    R::single(0x1F16A, 0x1F16F, ON),
    R::single(0x1F170, 0x1F1AC, L),
    R::single(0x1F1AD, 0x1F1AD, ON),
    R::single(0x1F1E6, 0x1F202, L),
    R::single(0x1F210, 0x1F23B, L),
    R::single(0x1F240, 0x1F248, L),
    R::single(0x1F250, 0x1F251, L),
    R::single(0x1F260, 0x1F265, ON),
    R::single(0x1F300, 0x1F6D7, ON),
    R::single(0x1F6DD, 0x1F6EC, ON),
    R::single(0x1F6F0, 0x1F6FC, ON),
    R::single(0x1F700, 0x1F773, ON),
    R::single(0x1F780, 0x1F7D8, ON),
    R::single(0x1F7E0, 0x1F7EB, ON),
    R::single(0x1F7F0, 0x1F7F0, ON),
    R::single(0x1F800, 0x1F80B, ON),
    R::single(0x1F810, 0x1F847, ON),
    R::single(0x1F850, 0x1F859, ON),
    R::single(0x1F860, 0x1F887, ON),
    R::single(0x1F890, 0x1F8AD, ON),
    R::single(0x1F8B0, 0x1F8B1, ON),
    R::single(0x1F900, 0x1FA53, ON),
    R::single(0x1FA60, 0x1FA6D, ON),
    R::single(0x1FA70, 0x1FA74, ON),
    R::single(0x1FA78, 0x1FA7C, ON),
    R::single(0x1FA80, 0x1FA86, ON),
    R::single(0x1FA90, 0x1FAAC, ON),
    R::single(0x1FAB0, 0x1FABA, ON),
    R::single(0x1FAC0, 0x1FAC5, ON),
    R::single(0x1FAD0, 0x1FAD9, ON),
    R::single(0x1FAE0, 0x1FAE7, ON),
    R::single(0x1FAF0, 0x1FAF6, ON),
    R::single(0x1FB00, 0x1FB92, ON),
    R::single(0x1FB94, 0x1FBCA, ON),
    R::single(0x1FBF0, 0x1FBF9, EN),
    R::single(0x20000, 0x2A6DF, L),
    R::single(0x2A700, 0x2B738, L),
    R::single(0x2B740, 0x2B81D, L),
    R::single(0x2B820, 0x2CEA1, L),
    R::single(0x2CEB0, 0x2EBE0, L),
    R::single(0x2F800, 0x2FA1D, L),
    R::single(0x30000, 0x3134A, L),
    R::single(0xE0001, 0xE0001, BN),
    R::single(0xE0020, 0xE007F, BN),
    R::single(0xE0100, 0xE01EF, NSM),
    R::single(0xF0000, 0xFFFFD, L),
    R::single(0x100000, 0x10FFFD, L),
];
