// Generated from https://www.unicode.org/Public/14.0.0/ucd/extracted/DerivedGeneralCategory.txt
// Runs that alternate between two categories code point by code point
// are stored as one parity record. Unassigned code points are omitted.
// Do not edit by hand.

#![allow(non_upper_case_globals)]

use crate::category::GeneralCategory;
use crate::interval::IntervalRecord;

type R = IntervalRecord<GeneralCategory>;

const Lu: GeneralCategory = GeneralCategory::UppercaseLetter;
const Ll: GeneralCategory = GeneralCategory::LowercaseLetter;
const Lt: GeneralCategory = GeneralCategory::TitlecaseLetter;
const Lm: GeneralCategory = GeneralCategory::ModifierLetter;
const Lo: GeneralCategory = GeneralCategory::OtherLetter;
const Mn: GeneralCategory = GeneralCategory::NonspacingMark;
const Mc: GeneralCategory = GeneralCategory::SpacingMark;
const Me: GeneralCategory = GeneralCategory::EnclosingMark;
const Nd: GeneralCategory = GeneralCategory::DecimalNumber;
const Nl: GeneralCategory = GeneralCategory::LetterNumber;
const No: GeneralCategory = GeneralCategory::OtherNumber;
const Pc: GeneralCategory = GeneralCategory::ConnectorPunctuation;
const Pd: GeneralCategory = GeneralCategory::DashPunctuation;
const Ps: GeneralCategory = GeneralCategory::OpenPunctuation;
const Pe: GeneralCategory = GeneralCategory::ClosePunctuation;
const Pi: GeneralCategory = GeneralCategory::InitialPunctuation;
const Pf: GeneralCategory = GeneralCategory::FinalPunctuation;
const Po: GeneralCategory = GeneralCategory::OtherPunctuation;
const Sm: GeneralCategory = GeneralCategory::MathSymbol;
const Sc: GeneralCategory = GeneralCategory::CurrencySymbol;
const Sk: GeneralCategory = GeneralCategory::ModifierSymbol;
const So: GeneralCategory = GeneralCategory::OtherSymbol;
const Zs: GeneralCategory = GeneralCategory::SpaceSeparator;
const Zl: GeneralCategory = GeneralCategory::LineSeparator;
const Zp: GeneralCategory = GeneralCategory::ParagraphSeparator;
const Cc: GeneralCategory = GeneralCategory::Control;
const Cf: GeneralCategory = GeneralCategory::Format;
const Cs: GeneralCategory = GeneralCategory::Surrogate;
const Co: GeneralCategory = GeneralCategory::PrivateUse;

pub const CATEGORIES: &[R] = &[
    R::single(0x0000, 0x001F, Cc),
    R::single(0x0020, 0x0020, Zs),
    R::single(0x0021, 0x0023, Po),
    R::single(0x0024, 0x0024, Sc),
    R::single(0x0025, 0x0027, Po),
    R::single(0x0028, 0x0028, Ps),
    R::single(0x0029, 0x0029, Pe),
    R::single(0x002A, 0x002A, Po),
    R::single(0x002B, 0x002B, Sm),
    R::single(0x002C, 0x002C, Po),
    R::single(0x002D, 0x002D, Pd),
    R::single(0x002E, 0x002F, Po),
    R::single(0x0030, 0x0039, Nd),
    R::single(0x003A, 0x003B, Po),
    R::single(0x003C, 0x003E, Sm),
    R::single(0x003F, 0x0040, Po),
    R::single(0x0041, 0x005A, Lu),
    R::single(0x005B, 0x005B, Ps),
    R::single(0x005C, 0x005C, Po),
    R::single(0x005D, 0x005D, Pe),
    R::single(0x005E, 0x005E, Sk),
    R::single(0x005F, 0x005F, Pc),
    R::single(0x0060, 0x0060, Sk),
    R::single(0x0061, 0x007A, Ll),
    R::single(0x007B, 0x007B, Ps),
    R::single(0x007C, 0x007C, Sm),
    R::single(0x007D, 0x007D, Pe),
    R::single(0x007E, 0x007E, Sm),
    R::single(0x007F, 0x009F, Cc),
    R::single(0x00A0, 0x00A0, Zs),
    R::single(0x00A1, 0x00A1, Po),
    R::single(0x00A2, 0x00A5, Sc),
    R::single(0x00A6, 0x00A6, So),
    R::single(0x00A7, 0x00A7, Po),
    R::single(0x00A8, 0x00A8, Sk),
    R::single(0x00A9, 0x00A9, So),
    R::single(0x00AA, 0x00AA, Lo),
    R::single(0x00AB, 0x00AB, Pi),
    R::single(0x00AC, 0x00AC, Sm),
    R::single(0x00AD, 0x00AD, Cf),
    R::single(0x00AE, 0x00AE, So),
    R::single(0x00AF, 0x00AF, Sk),
    R::single(0x00B0, 0x00B0, So),
    R::single(0x00B1, 0x00B1, Sm),
    R::single(0x00B2, 0x00B3, No),
    R::single(0x00B4, 0x00B4, Sk),
    R::single(0x00B5, 0x00B5, Ll),
    R::single(0x00B6, 0x00B7, Po),
    R::single(0x00B8, 0x00B8, Sk),
    R::single(0x00B9, 0x00B9, No),
    R::single(0x00BA, 0x00BA, Lo),
    R::single(0x00BB, 0x00BB, Pf),
    R::single(0x00BC, 0x00BE, No),
    R::single(0x00BF, 0x00BF, Po),
    R::single(0x00C0, 0x00D6, Lu),
    R::single(0x00D7, 0x00D7, Sm),
    R::single(0x00D8, 0x00DE, Lu),
    R::single(0x00DF, 0x00F6, Ll),
    R::single(0x00F7, 0x00F7, Sm),
    R::single(0x00F8, 0x00FF, Ll),
    R::alternating(0x0100, 0x0137, Lu, Ll),
    R::alternating(0x0138, 0x0148, Ll, Lu),
    R::alternating(0x0149, 0x0178, Lu, Ll),
    R::alternating(0x0179, 0x017E, Ll, Lu),
    R::single(0x017F, 0x0180, Ll),
    R::single(0x0181, 0x0182, Lu),
    R::alternating(0x0183, 0x0186, Lu, Ll),
    R::single(0x0187, 0x0187, Lu),
    R::single(0x0188, 0x0188, Ll),
    R::single(0x0189, 0x018B, Lu),
    R::single(0x018C, 0x018D, Ll),
    R::single(0x018E, 0x0191, Lu),
    R::single(0x0192, 0x0192, Ll),
    R::single(0x0193, 0x0194, Lu),
    R::single(0x0195, 0x0195, Ll),
    R::single(0x0196, 0x0198, Lu),
    R::single(0x0199, 0x019B, Ll),
    R::single(0x019C, 0x019D, Lu),
    R::single(0x019E, 0x019E, Ll),
    R::single(0x019F, 0x01A0, Lu),
    R::alternating(0x01A1, 0x01A6, Lu, Ll),
    R::alternating(0x01A7, 0x01AA, Ll, Lu),
    R::alternating(0x01AB, 0x01AE, Lu, Ll),
    R::single(0x01AF, 0x01AF, Lu),
    R::single(0x01B0, 0x01B0, Ll),
    R::single(0x01B1, 0x01B3, Lu),
    R::alternating(0x01B4, 0x01B7, Ll, Lu),
    R::single(0x01B8, 0x01B8, Lu),
    R::single(0x01B9, 0x01BA, Ll),
    R::single(0x01BB, 0x01BB, Lo),
    R::single(0x01BC, 0x01BC, Lu),
    R::single(0x01BD, 0x01BF, Ll),
    R::single(0x01C0, 0x01C3, Lo),
    R::single(0x01C4, 0x01C4, Lu),
    R::single(0x01C5, 0x01C5, Lt),
    R::single(0x01C6, 0x01C6, Ll),
    R::single(0x01C7, 0x01C7, Lu),
    R::single(0x01C8, 0x01C8, Lt),
    R::single(0x01C9, 0x01C9, Ll),
    R::single(0x01CA, 0x01CA, Lu),
    R::single(0x01CB, 0x01CB, Lt),
    R::alternating(0x01CC, 0x01DC, Ll, Lu),
    R::alternating(0x01DD, 0x01EF, Lu, Ll),
    R::single(0x01F0, 0x01F0, Ll),
    R::single(0x01F1, 0x01F1, Lu),
    R::single(0x01F2, 0x01F2, Lt),
    R::alternating(0x01F3, 0x01F6, Lu, Ll),
    R::single(0x01F7, 0x01F8, Lu),
    R::alternating(0x01F9, 0x0233, Lu, Ll),
    R::single(0x0234, 0x0239, Ll),
    R::single(0x023A, 0x023B, Lu),
    R::single(0x023C, 0x023C, Ll),
    R::single(0x023D, 0x023E, Lu),
    R::single(0x023F, 0x0240, Ll),
    R::single(0x0241, 0x0241, Lu),
    R::single(0x0242, 0x0242, Ll),
    R::single(0x0243, 0x0246, Lu),
    R::alternating(0x0247, 0x024F, Lu, Ll),
    R::single(0x0250, 0x0293, Ll),
    R::single(0x0294, 0x0294, Lo),
    R::single(0x0295, 0x02AF, Ll),
    R::single(0x02B0, 0x02C1, Lm),
    R::single(0x02C2, 0x02C5, Sk),
    R::single(0x02C6, 0x02D1, Lm),
    R::single(0x02D2, 0x02DF, Sk),
    R::single(0x02E0, 0x02E4, Lm),
    R::single(0x02E5, 0x02EB, Sk),
    R::alternating(0x02EC, 0x02EF, Lm, Sk),
    R::single(0x02F0, 0x02FF, Sk),
    R::single(0x0300, 0x036F, Mn),
    R::alternating(0x0370, 0x0373, Lu, Ll),
    R::single(0x0374, 0x0374, Lm),
    R::single(0x0375, 0x0375, Sk),
    R::single(0x0376, 0x0376, Lu),
    R::single(0x0377, 0x0377, Ll),
    R::single(0x037A, 0x037A, Lm),
    R::single(0x037B, 0x037D, Ll),
    R::single(0x037E, 0x037E, Po),
    R::single(0x037F, 0x037F, Lu),
    R::single(0x0384, 0x0385, Sk),
    R::single(0x0386, 0x0386, Lu),
    R::single(0x0387, 0x0387, Po),
    R::single(0x0388, 0x038A, Lu),
    R::single(0x038C, 0x038C, Lu),
    R::single(0x038E, 0x038F, Lu),
    R::single(0x0390, 0x0390, Ll),
    R::single(0x0391, 0x03A1, Lu),
    R::single(0x03A3, 0x03AB, Lu),
    R::single(0x03AC, 0x03CE, Ll),
    R::single(0x03CF, 0x03CF, Lu),
    R::single(0x03D0, 0x03D1, Ll),
    R::single(0x03D2, 0x03D4, Lu),
    R::single(0x03D5, 0x03D7, Ll),
    R::alternating(0x03D8, 0x03EF, Lu, Ll),
    R::single(0x03F0, 0x03F3, Ll),
    R::single(0x03F4, 0x03F4, Lu),
    R::single(0x03F5, 0x03F5, Ll),
    R::single(0x03F6, 0x03F6, Sm),
    R::single(0x03F7, 0x03F7, Lu),
    R::single(0x03F8, 0x03F8, Ll),
    R::single(0x03F9, 0x03FA, Lu),
    R::single(0x03FB, 0x03FC, Ll),
    R::single(0x03FD, 0x042F, Lu),
    R::single(0x0430, 0x045F, Ll),
    R::alternating(0x0460, 0x0481, Lu, Ll),
    R::single(0x0482, 0x0482, So),
    R::single(0x0483, 0x0487, Mn),
    R::single(0x0488, 0x0489, Me),
    R::alternating(0x048A, 0x04C0, Lu, Ll),
    R::alternating(0x04C1, 0x04CE, Ll, Lu),
    R::alternating(0x04CF, 0x052F, Lu, Ll),
    R::single(0x0531, 0x0556, Lu),
    R::single(0x0559, 0x0559, Lm),
    R::single(0x055A, 0x055F, Po),
    R::single(0x0560, 0x0588, Ll),
    R::single(0x0589, 0x0589, Po),
    R::single(0x058A, 0x058A, Pd),
    R::single(0x058D, 0x058E, So),
    R::single(0x058F, 0x058F, Sc),
    R::single(0x0591, 0x05BD, Mn),
    R::single(0x05BE, 0x05BE, Pd),
    R::single(0x05BF, 0x05BF, Mn),
    R::single(0x05C0, 0x05C0, Po),
    R::single(0x05C1, 0x05C2, Mn),
    R::single(0x05C3, 0x05C3, Po),
    R::single(0x05C4, 0x05C5, Mn),
    R::single(0x05C6, 0x05C6, Po),
    R::single(0x05C7, 0x05C7, Mn),
    R::single(0x05D0, 0x05EA, Lo),
    R::single(0x05EF, 0x05F2, Lo),
    R::single(0x05F3, 0x05F4, Po),
    R::single(0x0600, 0x0605, Cf),
    R::single(0x0606, 0x0608, Sm),
    R::single(0x0609, 0x060A, Po),
    R::single(0x060B, 0x060B, Sc),
    R::single(0x060C, 0x060D, Po),
    R::single(0x060E, 0x060F, So),
    R::single(0x0610, 0x061A, Mn),
    R::single(0x061B, 0x061B, Po),
    R::single(0x061C, 0x061C, Cf),
    R::single(0x061D, 0x061F, Po),
    R::single(0x0620, 0x063F, Lo),
    R::single(0x0640, 0x0640, Lm),
    R::single(0x0641, 0x064A, Lo),
    R::single(0x064B, 0x065F, Mn),
    R::single(0x0660, 0x0669, Nd),
    R::single(0x066A, 0x066D, Po),
    R::single(0x066E, 0x066F, Lo),
    R::single(0x0670, 0x0670, Mn),
    R::single(0x0671, 0x06D3, Lo),
    R::single(0x06D4, 0x06D4, Po),
    R::single(0x06D5, 0x06D5, Lo),
    R::single(0x06D6, 0x06DC, Mn),
    R::single(0x06DD, 0x06DD, Cf),
    R::single(0x06DE, 0x06DE, So),
    R::single(0x06DF, 0x06E4, Mn),
    R::single(0x06E5, 0x06E6, Lm),
    R::single(0x06E7, 0x06E8, Mn),
    R::single(0x06E9, 0x06E9, So),
    R::single(0x06EA, 0x06ED, Mn),
    R::single(0x06EE, 0x06EF, Lo),
    R::single(0x06F0, 0x06F9, Nd),
    R::single(0x06FA, 0x06FC, Lo),
    R::single(0x06FD, 0x06FE, So),
    R::single(0x06FF, 0x06FF, Lo),
    R::single(0x0700, 0x070D, Po),
    R::single(0x070F, 0x070F, Cf),
    R::single(0x0710, 0x0710, Lo),
    R::single(0x0711, 0x0711, Mn),
    R::single(0x0712, 0x072F, Lo),
    R::single(0x0730, 0x074A, Mn),
    R::single(0x074D, 0x07A5, Lo),
    R::single(0x07A6, 0x07B0, Mn),
    R::single(0x07B1, 0x07B1, Lo),
    R::single(0x07C0, 0x07C9, Nd),
    R::single(0x07CA, 0x07EA, Lo),
    R::single(0x07EB, 0x07F3, Mn),
    R::single(0x07F4, 0x07F5, Lm),
    R::single(0x07F6, 0x07F6, So),
    R::single(0x07F7, 0x07F9, Po),
    R::single(0x07FA, 0x07FA, Lm),
    R::single(0x07FD, 0x07FD, Mn),
    R::single(0x07FE, 0x07FF, Sc),
    R::single(0x0800, 0x0815, Lo),
    R::single(0x0816, 0x0819, Mn),
    R::single(0x081A, 0x081A, Lm),
    R::single(0x081B, 0x0823, Mn),
    R::single(0x0824, 0x0824, Lm),
    R::single(0x0825, 0x0827, Mn),
    R::single(0x0828, 0x0828, Lm),
    R::single(0x0829, 0x082D, Mn),
    R::single(0x0830, 0x083E, Po),
    R::single(0x0840, 0x0858, Lo),
    R::single(0x0859, 0x085B, Mn),
    R::single(0x085E, 0x085E, Po),
    R::single(0x0860, 0x086A, Lo),
    R::single(0x0870, 0x0887, Lo),
    R::single(0x0888, 0x0888, Sk),
    R::single(0x0889, 0x088E, Lo),
    R::single(0x0890, 0x0891, Cf),
    R::single(0x0898, 0x089F, Mn),
    R::single(0x08A0, 0x08C8, Lo),
    R::single(0x08C9, 0x08C9, Lm),
    R::single(0x08CA, 0x08E1, Mn),
    R::single(0x08E2, 0x08E2, Cf),
    R::single(0x08E3, 0x0902, Mn),
    R::single(0x0903, 0x0903, Mc),
    R::single(0x0904, 0x0939, Lo),
    R::single(0x093A, 0x093A, Mn),
    R::single(0x093B, 0x093B, Mc),
    R::single(0x093C, 0x093C, Mn),
    R::single(0x093D, 0x093D, Lo),
    R::single(0x093E, 0x0940, Mc),
    R::single(0x0941, 0x0948, Mn),
    R::single(0x0949, 0x094C, Mc),
    R::single(0x094D, 0x094D, Mn),
    R::single(0x094E, 0x094F, Mc),
    R::single(0x0950, 0x0950, Lo),
    R::single(0x0951, 0x0957, Mn),
    R::single(0x0958, 0x0961, Lo),
    R::single(0x0962, 0x0963, Mn),
    R::single(0x0964, 0x0965, Po),
    R::single(0x0966, 0x096F, Nd),
    R::single(0x0970, 0x0970, Po),
    R::single(0x0971, 0x0971, Lm),
    R::single(0x0972, 0x0980, Lo),
    R::single(0x0981, 0x0981, Mn),
    R::single(0x0982, 0x0983, Mc),
    R::single(0x0985, 0x098C, Lo),
    R::single(0x098F, 0x0990, Lo),
    R::single(0x0993, 0x09A8, Lo),
    R::single(0x09AA, 0x09B0, Lo),
    R::single(0x09B2, 0x09B2, Lo),
    R::single(0x09B6, 0x09B9, Lo),
    R::single(0x09BC, 0x09BC, Mn),
    R::single(0x09BD, 0x09BD, Lo),
    R::single(0x09BE, 0x09C0, Mc),
    R::single(0x09C1, 0x09C4, Mn),
    R::single(0x09C7, 0x09C8, Mc),
    R::single(0x09CB, 0x09CC, Mc),
    R::single(0x09CD, 0x09CD, Mn),
    R::single(0x09CE, 0x09CE, Lo),
    R::single(0x09D7, 0x09D7, Mc),
    R::single(0x09DC, 0x09DD, Lo),
    R::single(0x09DF, 0x09E1, Lo),
    R::single(0x09E2, 0x09E3, Mn),
    R::single(0x09E6, 0x09EF, Nd),
    R::single(0x09F0, 0x09F1, Lo),
    R::single(0x09F2, 0x09F3, Sc),
    R::single(0x09F4, 0x09F9, No),
    R::single(0x09FA, 0x09FA, So),
    R::single(0x09FB, 0x09FB, Sc),
    R::single(0x09FC, 0x09FC, Lo),
    R::single(0x09FD, 0x09FD, Po),
    R::single(0x09FE, 0x09FE, Mn),
    R::single(0x0A01, 0x0A02, Mn),
    R::single(0x0A03, 0x0A03, Mc),
    R::single(0x0A05, 0x0A0A, Lo),
    R::single(0x0A0F, 0x0A10, Lo),
    R::single(0x0A13, 0x0A28, Lo),
    R::single(0x0A2A, 0x0A30, Lo),
    R::single(0x0A32, 0x0A33, Lo),
    R::single(0x0A35, 0x0A36, Lo),
    R::single(0x0A38, 0x0A39, Lo),
    R::single(0x0A3C, 0x0A3C, Mn),
    R::single(0x0A3E, 0x0A40, Mc),
    R::single(0x0A41, 0x0A42, Mn),
    R::single(0x0A47, 0x0A48, Mn),
    R::single(0x0A4B, 0x0A4D, Mn),
    R::single(0x0A51, 0x0A51, Mn),
    R::single(0x0A59, 0x0A5C, Lo),
    R::single(0x0A5E, 0x0A5E, Lo),
    R::single(0x0A66, 0x0A6F, Nd),
    R::single(0x0A70, 0x0A71, Mn),
    R::single(0x0A72, 0x0A74, Lo),
    R::single(0x0A75, 0x0A75, Mn),
    R::single(0x0A76, 0x0A76, Po),
    R::single(0x0A81, 0x0A82, Mn),
    R::single(0x0A83, 0x0A83, Mc),
    R::single(0x0A85, 0x0A8D, Lo),
    R::single(0x0A8F, 0x0A91, Lo),
    R::single(0x0A93, 0x0AA8, Lo),
    R::single(0x0AAA, 0x0AB0, Lo),
    R::single(0x0AB2, 0x0AB3, Lo),
    R::single(0x0AB5, 0x0AB9, Lo),
    R::single(0x0ABC, 0x0ABC, Mn),
    R::single(0x0ABD, 0x0ABD, Lo),
    R::single(0x0ABE, 0x0AC0, Mc),
    R::single(0x0AC1, 0x0AC5, Mn),
    R::single(0x0AC7, 0x0AC8, Mn),
    R::single(0x0AC9, 0x0AC9, Mc),
    R::single(0x0ACB, 0x0ACC, Mc),
    R::single(0x0ACD, 0x0ACD, Mn),
    R::single(0x0AD0, 0x0AD0, Lo),
    R::single(0x0AE0, 0x0AE1, Lo),
    R::single(0x0AE2, 0x0AE3, Mn),
    R::single(0x0AE6, 0x0AEF, Nd),
    R::single(0x0AF0, 0x0AF0, Po),
    R::single(0x0AF1, 0x0AF1, Sc),
    R::single(0x0AF9, 0x0AF9, Lo),
    R::single(0x0AFA, 0x0AFF, Mn),
    R::single(0x0B01, 0x0B01, Mn),
    R::single(0x0B02, 0x0B03, Mc),
    R::single(0x0B05, 0x0B0C, Lo),
    R::single(0x0B0F, 0x0B10, Lo),
    R::single(0x0B13, 0x0B28, Lo),
    R::single(0x0B2A, 0x0B30, Lo),
    R::single(0x0B32, 0x0B33, Lo),
    R::single(0x0B35, 0x0B39, Lo),
    R::single(0x0B3C, 0x0B3C, Mn),
    R::single(0x0B3D, 0x0B3D, Lo),
    R::alternating(0x0B3E, 0x0B41, Mc, Mn),
    R::single(0x0B42, 0x0B44, Mn),
    R::single(0x0B47, 0x0B48, Mc),
    R::single(0x0B4B, 0x0B4C, Mc),
    R::single(0x0B4D, 0x0B4D, Mn),
    R::single(0x0B55, 0x0B56, Mn),
    R::single(0x0B57, 0x0B57, Mc),
    R::single(0x0B5C, 0x0B5D, Lo),
    R::single(0x0B5F, 0x0B61, Lo),
    R::single(0x0B62, 0x0B63, Mn),
    R::single(0x0B66, 0x0B6F, Nd),
    R::single(0x0B70, 0x0B70, So),
    R::single(0x0B71, 0x0B71, Lo),
    R::single(0x0B72, 0x0B77, No),
    R::single(0x0B82, 0x0B82, Mn),
    R::single(0x0B83, 0x0B83, Lo),
    R::single(0x0B85, 0x0B8A, Lo),
    R::single(0x0B8E, 0x0B90, Lo),
    R::single(0x0B92, 0x0B95, Lo),
    R::single(0x0B99, 0x0B9A, Lo),
    R::single(0x0B9C, 0x0B9C, Lo),
    R::single(0x0B9E, 0x0B9F, Lo),
    R::single(0x0BA3, 0x0BA4, Lo),
    R::single(0x0BA8, 0x0BAA, Lo),
    R::single(0x0BAE, 0x0BB9, Lo),
    R::single(0x0BBE, 0x0BBF, Mc),
    R::single(0x0BC0, 0x0BC0, Mn),
    R::single(0x0BC1, 0x0BC2, Mc),
    R::single(0x0BC6, 0x0BC8, Mc),
    R::single(0x0BCA, 0x0BCC, Mc),
    R::single(0x0BCD, 0x0BCD, Mn),
    R::single(0x0BD0, 0x0BD0, Lo),
    R::single(0x0BD7, 0x0BD7, Mc),
    R::single(0x0BE6, 0x0BEF, Nd),
    R::single(0x0BF0, 0x0BF2, No),
    R::single(0x0BF3, 0x0BF8, So),
    R::single(0x0BF9, 0x0BF9, Sc),
    R::single(0x0BFA, 0x0BFA, So),
    R::single(0x0C00, 0x0C00, Mn),
    R::single(0x0C01, 0x0C03, Mc),
    R::single(0x0C04, 0x0C04, Mn),
    R::single(0x0C05, 0x0C0C, Lo),
    R::single(0x0C0E, 0x0C10, Lo),
    R::single(0x0C12, 0x0C28, Lo),
    R::single(0x0C2A, 0x0C39, Lo),
    R::single(0x0C3C, 0x0C3C, Mn),
    R::single(0x0C3D, 0x0C3D, Lo),
    R::single(0x0C3E, 0x0C40, Mn),
    R::single(0x0C41, 0x0C44, Mc),
    R::single(0x0C46, 0x0C48, Mn),
    R::single(0x0C4A, 0x0C4D, Mn),
    R::single(0x0C55, 0x0C56, Mn),
    R::single(0x0C58, 0x0C5A, Lo),
    R::single(0x0C5D, 0x0C5D, Lo),
    R::single(0x0C60, 0x0C61, Lo),
    R::single(0x0C62, 0x0C63, Mn),
    R::single(0x0C66, 0x0C6F, Nd),
    R::single(0x0C77, 0x0C77, Po),
    R::single(0x0C78, 0x0C7E, No),
    R::single(0x0C7F, 0x0C7F, So),
    R::single(0x0C80, 0x0C80, Lo),
    R::single(0x0C81, 0x0C81, Mn),
    R::single(0x0C82, 0x0C83, Mc),
    R::single(0x0C84, 0x0C84, Po),
    R::single(0x0C85, 0x0C8C, Lo),
    R::single(0x0C8E, 0x0C90, Lo),
    R::single(0x0C92, 0x0CA8, Lo),
    R::single(0x0CAA, 0x0CB3, Lo),
    R::single(0x0CB5, 0x0CB9, Lo),
    R::single(0x0CBC, 0x0CBC, Mn),
    R::single(0x0CBD, 0x0CBD, Lo),
    R::single(0x0CBE, 0x0CBE, Mc),
    R::single(0x0CBF, 0x0CBF, Mn),
    R::single(0x0CC0, 0x0CC4, Mc),
    R::single(0x0CC6, 0x0CC6, Mn),
    R::single(0x0CC7, 0x0CC8, Mc),
    R::single(0x0CCA, 0x0CCB, Mc),
    R::single(0x0CCC, 0x0CCD, Mn),
    R::single(0x0CD5, 0x0CD6, Mc),
    R::single(0x0CDD, 0x0CDE, Lo),
    R::single(0x0CE0, 0x0CE1, Lo),
    R::single(0x0CE2, 0x0CE3, Mn),
    R::single(0x0CE6, 0x0CEF, Nd),
    R::single(0x0CF1, 0x0CF2, Lo),
    R::single(0x0D00, 0x0D01, Mn),
    R::single(0x0D02, 0x0D03, Mc),
    R::single(0x0D04, 0x0D0C, Lo),
    R::single(0x0D0E, 0x0D10, Lo),
    R::single(0x0D12, 0x0D3A, Lo),
    R::single(0x0D3B, 0x0D3C, Mn),
    R::single(0x0D3D, 0x0D3D, Lo),
    R::single(0x0D3E, 0x0D40, Mc),
    R::single(0x0D41, 0x0D44, Mn),
    R::single(0x0D46, 0x0D48, Mc),
    R::single(0x0D4A, 0x0D4C, Mc),
    R::single(0x0D4D, 0x0D4D, Mn),
    R::single(0x0D4E, 0x0D4E, Lo),
    R::single(0x0D4F, 0x0D4F, So),
    R::single(0x0D54, 0x0D56, Lo),
    R::single(0x0D57, 0x0D57, Mc),
    R::single(0x0D58, 0x0D5E, No),
    R::single(0x0D5F, 0x0D61, Lo),
    R::single(0x0D62, 0x0D63, Mn),
    R::single(0x0D66, 0x0D6F, Nd),
    R::single(0x0D70, 0x0D78, No),
    R::single(0x0D79, 0x0D79, So),
    R::single(0x0D7A, 0x0D7F, Lo),
    R::single(0x0D81, 0x0D81, Mn),
    R::single(0x0D82, 0x0D83, Mc),
    R::single(0x0D85, 0x0D96, Lo),
    R::single(0x0D9A, 0x0DB1, Lo),
    R::single(0x0DB3, 0x0DBB, Lo),
    R::single(0x0DBD, 0x0DBD, Lo),
    R::single(0x0DC0, 0x0DC6, Lo),
    R::single(0x0DCA, 0x0DCA, Mn),
    R::single(0x0DCF, 0x0DD1, Mc),
    R::single(0x0DD2, 0x0DD4, Mn),
    R::single(0x0DD6, 0x0DD6, Mn),
    R::single(0x0DD8, 0x0DDF, Mc),
    R::single(0x0DE6, 0x0DEF, Nd),
    R::single(0x0DF2, 0x0DF3, Mc),
    R::single(0x0DF4, 0x0DF4, Po),
    R::single(0x0E01, 0x0E30, Lo),
    R::single(0x0E31, 0x0E31, Mn),
    R::single(0x0E32, 0x0E33, Lo),
    R::single(0x0E34, 0x0E3A, Mn),
    R::single(0x0E3F, 0x0E3F, Sc),
    R::single(0x0E40, 0x0E45, Lo),
    R::single(0x0E46, 0x0E46, Lm),
    R::single(0x0E47, 0x0E4E, Mn),
    R::single(0x0E4F, 0x0E4F, Po),
    R::single(0x0E50, 0x0E59, Nd),
    R::single(0x0E5A, 0x0E5B, Po),
    R::single(0x0E81, 0x0E82, Lo),
    R::single(0x0E84, 0x0E84, Lo),
    R::single(0x0E86, 0x0E8A, Lo),
    R::single(0x0E8C, 0x0EA3, Lo),
    R::single(0x0EA5, 0x0EA5, Lo),
    R::single(0x0EA7, 0x0EB0, Lo),
    R::single(0x0EB1, 0x0EB1, Mn),
    R::single(0x0EB2, 0x0EB3, Lo),
    R::single(0x0EB4, 0x0EBC, Mn),
    R::single(0x0EBD, 0x0EBD, Lo),
    R::single(0x0EC0, 0x0EC4, Lo),
    R::single(0x0EC6, 0x0EC6, Lm),
    R::single(0x0EC8, 0x0ECD, Mn),
    R::single(0x0ED0, 0x0ED9, Nd),
    R::single(0x0EDC, 0x0EDF, Lo),
    R::single(0x0F00, 0x0F00, Lo),
    R::single(0x0F01, 0x0F03, So),
    R::single(0x0F04, 0x0F12, Po),
    R::single(0x0F13, 0x0F13, So),
    R::single(0x0F14, 0x0F14, Po),
    R::single(0x0F15, 0x0F17, So),
    R::single(0x0F18, 0x0F19, Mn),
    R::single(0x0F1A, 0x0F1F, So),
    R::single(0x0F20, 0x0F29, Nd),
    R::single(0x0F2A, 0x0F33, No),
    R::alternating(0x0F34, 0x0F39, So, Mn),
    R::alternating(0x0F3A, 0x0F3D, Ps, Pe),
    R::single(0x0F3E, 0x0F3F, Mc),
    R::single(0x0F40, 0x0F47, Lo),
    R::single(0x0F49, 0x0F6C, Lo),
    R::single(0x0F71, 0x0F7E, Mn),
    R::single(0x0F7F, 0x0F7F, Mc),
    R::single(0x0F80, 0x0F84, Mn),
    R::single(0x0F85, 0x0F85, Po),
    R::single(0x0F86, 0x0F87, Mn),
    R::single(0x0F88, 0x0F8C, Lo),
    R::single(0x0F8D, 0x0F97, Mn),
    R::single(0x0F99, 0x0FBC, Mn),
    R::single(0x0FBE, 0x0FC5, So),
    R::single(0x0FC6, 0x0FC6, Mn),
    R::single(0x0FC7, 0x0FCC, So),
    R::single(0x0FCE, 0x0FCF, So),
    R::single(0x0FD0, 0x0FD4, Po),
    R::single(0x0FD5, 0x0FD8, So),
    R::single(0x0FD9, 0x0FDA, Po),
    R::single(0x1000, 0x102A, Lo),
    R::single(0x102B, 0x102C, Mc),
    R::single(0x102D, 0x1030, Mn),
    R::single(0x1031, 0x1031, Mc),
    R::single(0x1032, 0x1037, Mn),
    R::single(0x1038, 0x1038, Mc),
    R::single(0x1039, 0x103A, Mn),
    R::single(0x103B, 0x103C, Mc),
    R::single(0x103D, 0x103E, Mn),
    R::single(0x103F, 0x103F, Lo),
    R::single(0x1040, 0x1049, Nd),
    R::single(0x104A, 0x104F, Po),
    R::single(0x1050, 0x1055, Lo),
    R::single(0x1056, 0x1057, Mc),
    R::single(0x1058, 0x1059, Mn),
    R::single(0x105A, 0x105D, Lo),
    R::single(0x105E, 0x1060, Mn),
    R::single(0x1061, 0x1061, Lo),
    R::single(0x1062, 0x1064, Mc),
    R::single(0x1065, 0x1066, Lo),
    R::single(0x1067, 0x106D, Mc),
    R::single(0x106E, 0x1070, Lo),
    R::single(0x1071, 0x1074, Mn),
    R::single(0x1075, 0x1081, Lo),
    R::single(0x1082, 0x1082, Mn),
    R::single(0x1083, 0x1084, Mc),
    R::single(0x1085, 0x1086, Mn),
    R::single(0x1087, 0x108C, Mc),
    R::single(0x108D, 0x108D, Mn),
    R::single(0x108E, 0x108E, Lo),
    R::single(0x108F, 0x108F, Mc),
    R::single(0x1090, 0x1099, Nd),
    R::single(0x109A, 0x109C, Mc),
    R::single(0x109D, 0x109D, Mn),
    R::single(0x109E, 0x109F, So),
    R::single(0x10A0, 0x10C5, Lu),
    R::single(0x10C7, 0x10C7, Lu),
    R::single(0x10CD, 0x10CD, Lu),
    R::single(0x10D0, 0x10FA, Ll),
    R::single(0x10FB, 0x10FB, Po),
    R::single(0x10FC, 0x10FC, Lm),
    R::single(0x10FD, 0x10FF, Ll),
    R::single(0x1100, 0x1248, Lo),
    R::single(0x124A, 0x124D, Lo),
    R::single(0x1250, 0x1256, Lo),
    R::single(0x1258, 0x1258, Lo),
    R::single(0x125A, 0x125D, Lo),
    R::single(0x1260, 0x1288, Lo),
    R::single(0x128A, 0x128D, Lo),
    R::single(0x1290, 0x12B0, Lo),
    R::single(0x12B2, 0x12B5, Lo),
    R::single(0x12B8, 0x12BE, Lo),
    R::single(0x12C0, 0x12C0, Lo),
    R::single(0x12C2, 0x12C5, Lo),
    R::single(0x12C8, 0x12D6, Lo),
    R::single(0x12D8, 0x1310, Lo),
    R::single(0x1312, 0x1315, Lo),
    R::single(0x1318, 0x135A, Lo),
    R::single(0x135D, 0x135F, Mn),
    R::single(0x1360, 0x1368, Po),
    R::single(0x1369, 0x137C, No),
    R::single(0x1380, 0x138F, Lo),
    R::single(0x1390, 0x1399, So),
    R::single(0x13A0, 0x13F5, Lu),
    R::single(0x13F8, 0x13FD, Ll),
    R::single(0x1400, 0x1400, Pd),
    R::single(0x1401, 0x166C, Lo),
    R::single(0x166D, 0x166D, So),
    R::single(0x166E, 0x166E, Po),
    R::single(0x166F, 0x167F, Lo),
    R::single(0x1680, 0x1680, Zs),
    R::single(0x1681, 0x169A, Lo),
    R::single(0x169B, 0x169B, Ps),
    R::single(0x169C, 0x169C, Pe),
    R::single(0x16A0, 0x16EA, Lo),
    R::single(0x16EB, 0x16ED, Po),
    R::single(0x16EE, 0x16F0, Nl),
    R::single(0x16F1, 0x16F8, Lo),
    R::single(0x1700, 0x1711, Lo),
    R::single(0x1712, 0x1714, Mn),
    R::single(0x1715, 0x1715, Mc),
    R::single(0x171F, 0x1731, Lo),
    R::single(0x1732, 0x1733, Mn),
    R::single(0x1734, 0x1734, Mc),
    R::single(0x1735, 0x1736, Po),
    R::single(0x1740, 0x1751, Lo),
    R::single(0x1752, 0x1753, Mn),
    R::single(0x1760, 0x176C, Lo),
    R::single(0x176E, 0x1770, Lo),
    R::single(0x1772, 0x1773, Mn),
    R::single(0x1780, 0x17B3, Lo),
    R::single(0x17B4, 0x17B5, Mn),
    R::single(0x17B6, 0x17B6, Mc),
    R::single(0x17B7, 0x17BD, Mn),
    R::single(0x17BE, 0x17C5, Mc),
    R::single(0x17C6, 0x17C6, Mn),
    R::single(0x17C7, 0x17C8, Mc),
    R::single(0x17C9, 0x17D3, Mn),
    R::single(0x17D4, 0x17D6, Po),
    R::single(0x17D7, 0x17D7, Lm),
    R::single(0x17D8, 0x17DA, Po),
    R::single(0x17DB, 0x17DB, Sc),
    R::single(0x17DC, 0x17DC, Lo),
    R::single(0x17DD, 0x17DD, Mn),
    R::single(0x17E0, 0x17E9, Nd),
    R::single(0x17F0, 0x17F9, No),
    R::single(0x1800, 0x1805, Po),
    R::single(0x1806, 0x1806, Pd),
    R::single(0x1807, 0x180A, Po),
    R::single(0x180B, 0x180D, Mn),
    R::single(0x180E, 0x180E, Cf),
    R::single(0x180F, 0x180F, Mn),
    R::single(0x1810, 0x1819, Nd),
    R::single(0x1820, 0x1842, Lo),
    R::single(0x1843, 0x1843, Lm),
    R::single(0x1844, 0x1878, Lo),
    R::single(0x1880, 0x1884, Lo),
    R::single(0x1885, 0x1886, Mn),
    R::single(0x1887, 0x18A8, Lo),
    R::single(0x18A9, 0x18A9, Mn),
    R::single(0x18AA, 0x18AA, Lo),
    R::single(0x18B0, 0x18F5, Lo),
    R::single(0x1900, 0x191E, Lo),
    R::single(0x1920, 0x1922, Mn),
    R::single(0x1923, 0x1926, Mc),
    R::single(0x1927, 0x1928, Mn),
    R::single(0x1929, 0x192B, Mc),
    R::single(0x1930, 0x1931, Mc),
    R::single(0x1932, 0x1932, Mn),
    R::single(0x1933, 0x1938, Mc),
    R::single(0x1939, 0x193B, Mn),
    R::single(0x1940, 0x1940, So),
    R::single(0x1944, 0x1945, Po),
    R::single(0x1946, 0x194F, Nd),
    R::single(0x1950, 0x196D, Lo),
    R::single(0x1970, 0x1974, Lo),
    R::single(0x1980, 0x19AB, Lo),
    R::single(0x19B0, 0x19C9, Lo),
    R::single(0x19D0, 0x19D9, Nd),
    R::single(0x19DA, 0x19DA, No),
    R::single(0x19DE, 0x19FF, So),
    R::single(0x1A00, 0x1A16, Lo),
    R::single(0x1A17, 0x1A18, Mn),
    R::single(0x1A19, 0x1A1A, Mc),
    R::single(0x1A1B, 0x1A1B, Mn),
    R::single(0x1A1E, 0x1A1F, Po),
    R::single(0x1A20, 0x1A54, Lo),
    R::alternating(0x1A55, 0x1A58, Mn, Mc),
    R::single(0x1A59, 0x1A5E, Mn),
    R::alternating(0x1A60, 0x1A63, Mn, Mc),
    R::single(0x1A64, 0x1A64, Mc),
    R::single(0x1A65, 0x1A6C, Mn),
    R::single(0x1A6D, 0x1A72, Mc),
    R::single(0x1A73, 0x1A7C, Mn),
    R::single(0x1A7F, 0x1A7F, Mn),
    R::single(0x1A80, 0x1A89, Nd),
    R::single(0x1A90, 0x1A99, Nd),
    R::single(0x1AA0, 0x1AA6, Po),
    R::single(0x1AA7, 0x1AA7, Lm),
    R::single(0x1AA8, 0x1AAD, Po),
    R::single(0x1AB0, 0x1ABD, Mn),
    R::single(0x1ABE, 0x1ABE, Me),
    R::single(0x1ABF, 0x1ACE, Mn),
    R::single(0x1B00, 0x1B03, Mn),
    R::single(0x1B04, 0x1B04, Mc),
    R::single(0x1B05, 0x1B33, Lo),
    R::single(0x1B34, 0x1B34, Mn),
    R::single(0x1B35, 0x1B35, Mc),
    R::single(0x1B36, 0x1B3A, Mn),
    R::single(0x1B3B, 0x1B3B, Mc),
    R::single(0x1B3C, 0x1B3C, Mn),
    R::single(0x1B3D, 0x1B41, Mc),
    R::single(0x1B42, 0x1B42, Mn),
    R::single(0x1B43, 0x1B44, Mc),
    R::single(0x1B45, 0x1B4C, Lo),
    R::single(0x1B50, 0x1B59, Nd),
    R::single(0x1B5A, 0x1B60, Po),
    R::single(0x1B61, 0x1B6A, So),
    R::single(0x1B6B, 0x1B73, Mn),
    R::single(0x1B74, 0x1B7C, So),
    R::single(0x1B7D, 0x1B7E, Po),
    R::single(0x1B80, 0x1B81, Mn),
    R::single(0x1B82, 0x1B82, Mc),
    R::single(0x1B83, 0x1BA0, Lo),
    R::single(0x1BA1, 0x1BA1, Mc),
    R::single(0x1BA2, 0x1BA5, Mn),
    R::single(0x1BA6, 0x1BA7, Mc),
    R::single(0x1BA8, 0x1BA9, Mn),
    R::single(0x1BAA, 0x1BAA, Mc),
    R::single(0x1BAB, 0x1BAD, Mn),
    R::single(0x1BAE, 0x1BAF, Lo),
    R::single(0x1BB0, 0x1BB9, Nd),
    R::single(0x1BBA, 0x1BE5, Lo),
    R::single(0x1BE6, 0x1BE6, Mn),
    R::single(0x1BE7, 0x1BE7, Mc),
    R::single(0x1BE8, 0x1BE9, Mn),
    R::single(0x1BEA, 0x1BEC, Mc),
    R::single(0x1BED, 0x1BED, Mn),
    R::single(0x1BEE, 0x1BEE, Mc),
    R::single(0x1BEF, 0x1BF1, Mn),
    R::single(0x1BF2, 0x1BF3, Mc),
    R::single(0x1BFC, 0x1BFF, Po),
    R::single(0x1C00, 0x1C23, Lo),
    R::single(0x1C24, 0x1C2B, Mc),
    R::single(0x1C2C, 0x1C33, Mn),
    R::single(0x1C34, 0x1C35, Mc),
    R::single(0x1C36, 0x1C37, Mn),
    R::single(0x1C3B, 0x1C3F, Po),
    R::single(0x1C40, 0x1C49, Nd),
    R::single(0x1C4D, 0x1C4F, Lo),
    R::single(0x1C50, 0x1C59, Nd),
    R::single(0x1C5A, 0x1C77, Lo),
    R::single(0x1C78, 0x1C7D, Lm),
    R::single(0x1C7E, 0x1C7F, Po),
    R::single(0x1C80, 0x1C88, Ll),
    R::single(0x1C90, 0x1CBA, Lu),
    R::single(0x1CBD, 0x1CBF, Lu),
    R::single(0x1CC0, 0x1CC7, Po),
    R::single(0x1CD0, 0x1CD2, Mn),
    R::single(0x1CD3, 0x1CD3, Po),
    R::single(0x1CD4, 0x1CE0, Mn),
    R::single(0x1CE1, 0x1CE1, Mc),
    R::single(0x1CE2, 0x1CE8, Mn),
    R::single(0x1CE9, 0x1CEC, Lo),
    R::single(0x1CED, 0x1CED, Mn),
    R::single(0x1CEE, 0x1CF3, Lo),
    R::single(0x1CF4, 0x1CF4, Mn),
    R::single(0x1CF5, 0x1CF6, Lo),
    R::single(0x1CF7, 0x1CF7, Mc),
    R::single(0x1CF8, 0x1CF9, Mn),
    R::single(0x1CFA, 0x1CFA, Lo),
    R::single(0x1D00, 0x1D2B, Ll),
    R::single(0x1D2C, 0x1D6A, Lm),
    R::single(0x1D6B, 0x1D77, Ll),
    R::single(0x1D78, 0x1D78, Lm),
    R::single(0x1D79, 0x1D9A, Ll),
    R::single(0x1D9B, 0x1DBF, Lm),
    R::single(0x1DC0, 0x1DFF, Mn),
    R::alternating(0x1E00, 0x1E95, Lu, Ll),
    R::single(0x1E96, 0x1E9D, Ll),
    R::alternating(0x1E9E, 0x1EFF, Lu, Ll),
    R::single(0x1F00, 0x1F07, Ll),
    R::single(0x1F08, 0x1F0F, Lu),
    R::single(0x1F10, 0x1F15, Ll),
    R::single(0x1F18, 0x1F1D, Lu),
    R::single(0x1F20, 0x1F27, Ll),
    R::single(0x1F28, 0x1F2F, Lu),
    R::single(0x1F30, 0x1F37, Ll),
    R::single(0x1F38, 0x1F3F, Lu),
    R::single(0x1F40, 0x1F45, Ll),
    R::single(0x1F48, 0x1F4D, Lu),
    R::single(0x1F50, 0x1F57, Ll),
    R::single(0x1F59, 0x1F59, Lu),
    R::single(0x1F5B, 0x1F5B, Lu),
    R::single(0x1F5D, 0x1F5D, Lu),
    R::single(0x1F5F, 0x1F5F, Lu),
    R::single(0x1F60, 0x1F67, Ll),
    R::single(0x1F68, 0x1F6F, Lu),
    R::single(0x1F70, 0x1F7D, Ll),
    R::single(0x1F80, 0x1F87, Ll),
    R::single(0x1F88, 0x1F8F, Lt),
    R::single(0x1F90, 0x1F97, Ll),
    R::single(0x1F98, 0x1F9F, Lt),
    R::single(0x1FA0, 0x1FA7, Ll),
    R::single(0x1FA8, 0x1FAF, Lt),
    R::single(0x1FB0, 0x1FB4, Ll),
    R::single(0x1FB6, 0x1FB7, Ll),
    R::single(0x1FB8, 0x1FBB, Lu),
    R::single(0x1FBC, 0x1FBC, Lt),
    R::single(0x1FBD, 0x1FBD, Sk),
    R::single(0x1FBE, 0x1FBE, Ll),
    R::single(0x1FBF, 0x1FC1, Sk),
    R::single(0x1FC2, 0x1FC4, Ll),
    R::single(0x1FC6, 0x1FC7, Ll),
    R::single(0x1FC8, 0x1FCB, Lu),
    R::single(0x1FCC, 0x1FCC, Lt),
    R::single(0x1FCD, 0x1FCF, Sk),
    R::single(0x1FD0, 0x1FD3, Ll),
    R::single(0x1FD6, 0x1FD7, Ll),
    R::single(0x1FD8, 0x1FDB, Lu),
    R::single(0x1FDD, 0x1FDF, Sk),
    R::single(0x1FE0, 0x1FE7, Ll),
    R::single(0x1FE8, 0x1FEC, Lu),
    R::single(0x1FED, 0x1FEF, Sk),
    R::single(0x1FF2, 0x1FF4, Ll),
    R::single(0x1FF6, 0x1FF7, Ll),
    R::single(0x1FF8, 0x1FFB, Lu),
    R::single(0x1FFC, 0x1FFC, Lt),
    R::single(0x1FFD, 0x1FFE, Sk),
    R::single(0x2000, 0x200A, Zs),
    R::single(0x200B, 0x200F, Cf),
    R::single(0x2010, 0x2015, Pd),
    R::single(0x2016, 0x2017, Po),
    R::single(0x2018, 0x2018, Pi),
    R::single(0x2019, 0x2019, Pf),
    R::single(0x201A, 0x201A, Ps),
    R::single(0x201B, 0x201C, Pi),
    R::single(0x201D, 0x201D, Pf),
    R::single(0x201E, 0x201E, Ps),
    R::single(0x201F, 0x201F, Pi),
    R::single(0x2020, 0x2027, Po),
    R::single(0x2028, 0x2028, Zl),
    R::single(0x2029, 0x2029, Zp),
    R::single(0x202A, 0x202E, Cf),
    R::single(0x202F, 0x202F, Zs),
    R::single(0x2030, 0x2038, Po),
    R::single(0x2039, 0x2039, Pi),
    R::single(0x203A, 0x203A, Pf),
    R::single(0x203B, 0x203E, Po),
    R::single(0x203F, 0x2040, Pc),
    R::single(0x2041, 0x2043, Po),
    R::single(0x2044, 0x2044, Sm),
    R::single(0x2045, 0x2045, Ps),
    R::single(0x2046, 0x2046, Pe),
    R::single(0x2047, 0x2051, Po),
    R::single(0x2052, 0x2052, Sm),
    R::single(0x2053, 0x2053, Po),
    R::single(0x2054, 0x2054, Pc),
    R::single(0x2055, 0x205E, Po),
    R::single(0x205F, 0x205F, Zs),
    R::single(0x2060, 0x2064, Cf),
    R::single(0x2066, 0x206F, Cf),
    R::single(0x2070, 0x2070, No),
    R::single(0x2071, 0x2071, Lm),
    R::single(0x2074, 0x2079, No),
    R::single(0x207A, 0x207C, Sm),
    R::single(0x207D, 0x207D, Ps),
    R::single(0x207E, 0x207E, Pe),
    R::single(0x207F, 0x207F, Lm),
    R::single(0x2080, 0x2089, No),
    R::single(0x208A, 0x208C, Sm),
    R::single(0x208D, 0x208D, Ps),
    R::single(0x208E, 0x208E, Pe),
    R::single(0x2090, 0x209C, Lm),
    R::single(0x20A0, 0x20C0, Sc),
    R::single(0x20D0, 0x20DC, Mn),
    R::single(0x20DD, 0x20E0, Me),
    R::single(0x20E1, 0x20E1, Mn),
    R::single(0x20E2, 0x20E4, Me),
    R::single(0x20E5, 0x20F0, Mn),
    R::single(0x2100, 0x2101, So),
    R::single(0x2102, 0x2102, Lu),
    R::single(0x2103, 0x2106, So),
    R::single(0x2107, 0x2107, Lu),
    R::single(0x2108, 0x2109, So),
    R::single(0x210A, 0x210A, Ll),
    R::single(0x210B, 0x210D, Lu),
    R::single(0x210E, 0x210F, Ll),
    R::single(0x2110, 0x2112, Lu),
    R::single(0x2113, 0x2113, Ll),
    R::single(0x2114, 0x2114, So),
    R::single(0x2115, 0x2115, Lu),
    R::single(0x2116, 0x2117, So),
    R::single(0x2118, 0x2118, Sm),
    R::single(0x2119, 0x211D, Lu),
    R::single(0x211E, 0x2123, So),
    R::alternating(0x2124, 0x212A, Lu, So),
    R::single(0x212B, 0x212D, Lu),
    R::single(0x212E, 0x212E, So),
    R::single(0x212F, 0x212F, Ll),
    R::single(0x2130, 0x2133, Lu),
    R::single(0x2134, 0x2134, Ll),
    R::single(0x2135, 0x2138, Lo),
    R::single(0x2139, 0x2139, Ll),
    R::single(0x213A, 0x213B, So),
    R::single(0x213C, 0x213D, Ll),
    R::single(0x213E, 0x213F, Lu),
    R::single(0x2140, 0x2144, Sm),
    R::single(0x2145, 0x2145, Lu),
    R::single(0x2146, 0x2149, Ll),
    R::single(0x214A, 0x214A, So),
    R::single(0x214B, 0x214B, Sm),
    R::single(0x214C, 0x214D, So),
    R::single(0x214E, 0x214E, Ll),
    R::single(0x214F, 0x214F, So),
    R::single(0x2150, 0x215F, No),
    R::single(0x2160, 0x2182, Nl),
    R::single(0x2183, 0x2183, Lu),
    R::single(0x2184, 0x2184, Ll),
    R::single(0x2185, 0x2188, Nl),
    R::single(0x2189, 0x2189, No),
    R::single(0x218A, 0x218B, So),
    R::single(0x2190, 0x2194, Sm),
    R::single(0x2195, 0x2199, So),
    R::single(0x219A, 0x219B, Sm),
    R::single(0x219C, 0x219F, So),
    R::single(0x21A0, 0x21A0, Sm),
    R::single(0x21A1, 0x21A2, So),
    R::single(0x21A3, 0x21A3, Sm),
    R::single(0x21A4, 0x21A5, So),
    R::single(0x21A6, 0x21A6, Sm),
    R::single(0x21A7, 0x21AD, So),
    R::single(0x21AE, 0x21AE, Sm),
    R::single(0x21AF, 0x21CD, So),
    R::single(0x21CE, 0x21CF, Sm),
    R::single(0x21D0, 0x21D1, So),
    R::alternating(0x21D2, 0x21D5, Sm, So),
    R::single(0x21D6, 0x21F3, So),
    R::single(0x21F4, 0x22FF, Sm),
    R::single(0x2300, 0x2307, So),
    R::alternating(0x2308, 0x230B, Ps, Pe),
    R::single(0x230C, 0x231F, So),
    R::single(0x2320, 0x2321, Sm),
    R::single(0x2322, 0x2328, So),
    R::single(0x2329, 0x2329, Ps),
    R::single(0x232A, 0x232A, Pe),
    R::single(0x232B, 0x237B, So),
    R::single(0x237C, 0x237C, Sm),
    R::single(0x237D, 0x239A, So),
    R::single(0x239B, 0x23B3, Sm),
    R::single(0x23B4, 0x23DB, So),
    R::single(0x23DC, 0x23E1, Sm),
    R::single(0x23E2, 0x2426, So),
    R::single(0x2440, 0x244A, So),
    R::single(0x2460, 0x249B, No),
    R::single(0x249C, 0x24E9, So),
    R::single(0x24EA, 0x24FF, No),
    R::single(0x2500, 0x25B6, So),
    R::single(0x25B7, 0x25B7, Sm),
    R::single(0x25B8, 0x25C0, So),
    R::single(0x25C1, 0x25C1, Sm),
    R::single(0x25C2, 0x25F7, So),
    R::single(0x25F8, 0x25FF, Sm),
    R::single(0x2600, 0x266E, So),
    R::single(0x266F, 0x266F, Sm),
    R::single(0x2670, 0x2767, So),
    R::alternating(0x2768, 0x2775, Ps, Pe),
    R::single(0x2776, 0x2793, No),
    R::single(0x2794, 0x27BF, So),
    R::single(0x27C0, 0x27C4, Sm),
    R::single(0x27C5, 0x27C5, Ps),
    R::single(0x27C6, 0x27C6, Pe),
    R::single(0x27C7, 0x27E5, Sm),
    R::alternating(0x27E6, 0x27EF, Ps, Pe),
    R::single(0x27F0, 0x27FF, Sm),
    R::single(0x2800, 0x28FF, So),
    R::single(0x2900, 0x2982, Sm),
    R::alternating(0x2983, 0x2998, Pe, Ps),
    R::single(0x2999, 0x29D7, Sm),
    R::alternating(0x29D8, 0x29DB, Ps, Pe),
    R::single(0x29DC, 0x29FB, Sm),
    R::single(0x29FC, 0x29FC, Ps),
    R::single(0x29FD, 0x29FD, Pe),
    R::single(0x29FE, 0x2AFF, Sm),
    R::single(0x2B00, 0x2B2F, So),
    R::single(0x2B30, 0x2B44, Sm),
    R::single(0x2B45, 0x2B46, So),
    R::single(0x2B47, 0x2B4C, Sm),
    R::single(0x2B4D, 0x2B73, So),
    R::single(0x2B76, 0x2B95, So),
    R::single(0x2B97, 0x2BFF, So),
    R::single(0x2C00, 0x2C2F, Lu),
    R::single(0x2C30, 0x2C5F, Ll),
    R::single(0x2C60, 0x2C60, Lu),
    R::single(0x2C61, 0x2C61, Ll),
    R::single(0x2C62, 0x2C64, Lu),
    R::single(0x2C65, 0x2C66, Ll),
    R::alternating(0x2C67, 0x2C6D, Ll, Lu),
    R::single(0x2C6E, 0x2C70, Lu),
    R::single(0x2C71, 0x2C71, Ll),
    R::single(0x2C72, 0x2C72, Lu),
    R::single(0x2C73, 0x2C74, Ll),
    R::single(0x2C75, 0x2C75, Lu),
    R::single(0x2C76, 0x2C7B, Ll),
    R::single(0x2C7C, 0x2C7D, Lm),
    R::single(0x2C7E, 0x2C80, Lu),
    R::alternating(0x2C81, 0x2CE3, Lu, Ll),
    R::single(0x2CE4, 0x2CE4, Ll),
    R::single(0x2CE5, 0x2CEA, So),
    R::alternating(0x2CEB, 0x2CEE, Ll, Lu),
    R::single(0x2CEF, 0x2CF1, Mn),
    R::single(0x2CF2, 0x2CF2, Lu),
    R::single(0x2CF3, 0x2CF3, Ll),
    R::single(0x2CF9, 0x2CFC, Po),
    R::single(0x2CFD, 0x2CFD, No),
    R::single(0x2CFE, 0x2CFF, Po),
    R::single(0x2D00, 0x2D25, Ll),
    R::single(0x2D27, 0x2D27, Ll),
    R::single(0x2D2D, 0x2D2D, Ll),
    R::single(0x2D30, 0x2D67, Lo),
    R::single(0x2D6F, 0x2D6F, Lm),
    R::single(0x2D70, 0x2D70, Po),
    R::single(0x2D7F, 0x2D7F, Mn),
    R::single(0x2D80, 0x2D96, Lo),
    R::single(0x2DA0, 0x2DA6, Lo),
    R::single(0x2DA8, 0x2DAE, Lo),
    R::single(0x2DB0, 0x2DB6, Lo),
    R::single(0x2DB8, 0x2DBE, Lo),
    R::single(0x2DC0, 0x2DC6, Lo),
    R::single(0x2DC8, 0x2DCE, Lo),
    R::single(0x2DD0, 0x2DD6, Lo),
    R::single(0x2DD8, 0x2DDE, Lo),
    R::single(0x2DE0, 0x2DFF, Mn),
    R::single(0x2E00, 0x2E01, Po),
    R::alternating(0x2E02, 0x2E05, Pi, Pf),
    R::single(0x2E06, 0x2E08, Po),
    R::single(0x2E09, 0x2E09, Pi),
    R::single(0x2E0A, 0x2E0A, Pf),
    R::single(0x2E0B, 0x2E0B, Po),
    R::single(0x2E0C, 0x2E0C, Pi),
    R::single(0x2E0D, 0x2E0D, Pf),
    R::single(0x2E0E, 0x2E16, Po),
    R::single(0x2E17, 0x2E17, Pd),
    R::single(0x2E18, 0x2E19, Po),
    R::single(0x2E1A, 0x2E1A, Pd),
    R::single(0x2E1B, 0x2E1B, Po),
    R::single(0x2E1C, 0x2E1C, Pi),
    R::single(0x2E1D, 0x2E1D, Pf),
    R::single(0x2E1E, 0x2E1F, Po),
    R::single(0x2E20, 0x2E20, Pi),
    R::single(0x2E21, 0x2E21, Pf),
    R::alternating(0x2E22, 0x2E29, Ps, Pe),
    R::single(0x2E2A, 0x2E2E, Po),
    R::single(0x2E2F, 0x2E2F, Lm),
    R::single(0x2E30, 0x2E39, Po),
    R::single(0x2E3A, 0x2E3B, Pd),
    R::single(0x2E3C, 0x2E3F, Po),
    R::single(0x2E40, 0x2E40, Pd),
    R::single(0x2E41, 0x2E41, Po),
    R::single(0x2E42, 0x2E42, Ps),
    R::single(0x2E43, 0x2E4F, Po),
    R::single(0x2E50, 0x2E51, So),
    R::single(0x2E52, 0x2E54, Po),
    R::alternating(0x2E55, 0x2E5C, Pe, Ps),
    R::single(0x2E5D, 0x2E5D, Pd),
    R::single(0x2E80, 0x2E99, So),
    R::single(0x2E9B, 0x2EF3, So),
    R::single(0x2F00, 0x2FD5, So),
    R::single(0x2FF0, 0x2FFB, So),
    R::single(0x3000, 0x3000, Zs),
    R::single(0x3001, 0x3003, Po),
    R::single(0x3004, 0x3004, So),
    R::single(0x3005, 0x3005, Lm),
    R::single(0x3006, 0x3006, Lo),
    R::single(0x3007, 0x3007, Nl),
    R::alternating(0x3008, 0x3011, Ps, Pe),
    R::single(0x3012, 0x3013, So),
    R::alternating(0x3014, 0x301B, Ps, Pe),
    R::single(0x301C, 0x301C, Pd),
    R::single(0x301D, 0x301D, Ps),
    R::single(0x301E, 0x301F, Pe),
    R::single(0x3020, 0x3020, So),
    R::single(0x3021, 0x3029, Nl),
    R::single(0x302A, 0x302D, Mn),
    R::single(0x302E, 0x302F, Mc),
    R::single(0x3030, 0x3030, Pd),
    R::single(0x3031, 0x3035, Lm),
    R::single(0x3036, 0x3037, So),
    R::single(0x3038, 0x303A, Nl),
    R::single(0x303B, 0x303B, Lm),
    R::single(0x303C, 0x303C, Lo),
    R::single(0x303D, 0x303D, Po),
    R::single(0x303E, 0x303F, So),
    R::single(0x3041, 0x3096, Lo),
    R::single(0x3099, 0x309A, Mn),
    R::single(0x309B, 0x309C, Sk),
    R::single(0x309D, 0x309E, Lm),
    R::single(0x309F, 0x309F, Lo),
    R::single(0x30A0, 0x30A0, Pd),
    R::single(0x30A1, 0x30FA, Lo),
    R::single(0x30FB, 0x30FB, Po),
    R::single(0x30FC, 0x30FE, Lm),
    R::single(0x30FF, 0x30FF, Lo),
    R::single(0x3105, 0x312F, Lo),
    R::single(0x3131, 0x318E, Lo),
    R::single(0x3190, 0x3191, So),
    R::single(0x3192, 0x3195, No),
    R::single(0x3196, 0x319F, So),
    R::single(0x31A0, 0x31BF, Lo),
    R::single(0x31C0, 0x31E3, So),
    R::single(0x31F0, 0x31FF, Lo),
    R::single(0x3200, 0x321E, So),
    R::single(0x3220, 0x3229, No),
    R::single(0x322A, 0x3247, So),
    R::single(0x3248, 0x324F, No),
    R::single(0x3250, 0x3250, So),
    R::single(0x3251, 0x325F, No),
    R::single(0x3260, 0x327F, So),
    R::single(0x3280, 0x3289, No),
    R::single(0x328A, 0x32B0, So),
    R::single(0x32B1, 0x32BF, No),
    R::single(0x32C0, 0x33FF, So),
    R::single(0x3400, 0x4DBF, Lo),
    R::single(0x4DC0, 0x4DFF, So),
    R::single(0x4E00, 0xA014, Lo),
    R::single(0xA015, 0xA015, Lm),
    R::single(0xA016, 0xA48C, Lo),
    R::single(0xA490, 0xA4C6, So),
    R::single(0xA4D0, 0xA4F7, Lo),
    R::single(0xA4F8, 0xA4FD, Lm),
    R::single(0xA4FE, 0xA4FF, Po),
    R::single(0xA500, 0xA60B, Lo),
    R::single(0xA60C, 0xA60C, Lm),
    R::single(0xA60D, 0xA60F, Po),
    R::single(0xA610, 0xA61F, Lo),
    R::single(0xA620, 0xA629, Nd),
    R::single(0xA62A, 0xA62B, Lo),
    R::alternating(0xA640, 0xA66D, Lu, Ll),
    R::single(0xA66E, 0xA66E, Lo),
    R::single(0xA66F, 0xA66F, Mn),
    R::single(0xA670, 0xA672, Me),
    R::single(0xA673, 0xA673, Po),
    R::single(0xA674, 0xA67D, Mn),
    R::single(0xA67E, 0xA67E, Po),
    R::single(0xA67F, 0xA67F, Lm),
    R::alternating(0xA680, 0xA69B, Lu, Ll),
    R::single(0xA69C, 0xA69D, Lm),
    R::single(0xA69E, 0xA69F, Mn),
    R::single(0xA6A0, 0xA6E5, Lo),
    R::single(0xA6E6, 0xA6EF, Nl),
    R::single(0xA6F0, 0xA6F1, Mn),
    R::single(0xA6F2, 0xA6F7, Po),
    R::single(0xA700, 0xA716, Sk),
    R::single(0xA717, 0xA71F, Lm),
    R::single(0xA720, 0xA721, Sk),
    R::alternating(0xA722, 0xA72F, Lu, Ll),
    R::single(0xA730, 0xA731, Ll),
    R::alternating(0xA732, 0xA76F, Lu, Ll),
    R::single(0xA770, 0xA770, Lm),
    R::single(0xA771, 0xA778, Ll),
    R::alternating(0xA779, 0xA77D, Ll, Lu),
    R::alternating(0xA77E, 0xA787, Lu, Ll),
    R::single(0xA788, 0xA788, Lm),
    R::single(0xA789, 0xA78A, Sk),
    R::alternating(0xA78B, 0xA78E, Ll, Lu),
    R::single(0xA78F, 0xA78F, Lo),
    R::alternating(0xA790, 0xA793, Lu, Ll),
    R::single(0xA794, 0xA795, Ll),
    R::alternating(0xA796, 0xA7AA, Lu, Ll),
    R::single(0xA7AB, 0xA7AE, Lu),
    R::single(0xA7AF, 0xA7AF, Ll),
    R::single(0xA7B0, 0xA7B4, Lu),
    R::alternating(0xA7B5, 0xA7C4, Lu, Ll),
    R::single(0xA7C5, 0xA7C7, Lu),
    R::single(0xA7C8, 0xA7C8, Ll),
    R::single(0xA7C9, 0xA7C9, Lu),
    R::single(0xA7CA, 0xA7CA, Ll),
    R::single(0xA7D0, 0xA7D0, Lu),
    R::single(0xA7D1, 0xA7D1, Ll),
    R::single(0xA7D3, 0xA7D3, Ll),
    R::alternating(0xA7D5, 0xA7D9, Lu, Ll),
    R::single(0xA7F2, 0xA7F4, Lm),
    R::single(0xA7F5, 0xA7F5, Lu),
    R::single(0xA7F6, 0xA7F6, Ll),
    R::single(0xA7F7, 0xA7F7, Lo),
    R::single(0xA7F8, 0xA7F9, Lm),
    R::single(0xA7FA, 0xA7FA, Ll),
    R::single(0xA7FB, 0xA801, Lo),
    R::single(0xA802, 0xA802, Mn),
    R::single(0xA803, 0xA805, Lo),
    R::single(0xA806, 0xA806, Mn),
    R::single(0xA807, 0xA80A, Lo),
    R::single(0xA80B, 0xA80B, Mn),
    R::single(0xA80C, 0xA822, Lo),
    R::single(0xA823, 0xA824, Mc),
    R::single(0xA825, 0xA826, Mn),
    R::single(0xA827, 0xA827, Mc),
    R::single(0xA828, 0xA82B, So),
    R::single(0xA82C, 0xA82C, Mn),
    R::single(0xA830, 0xA835, No),
    R::single(0xA836, 0xA837, So),
    R::single(0xA838, 0xA838, Sc),
    R::single(0xA839, 0xA839, So),
    R::single(0xA840, 0xA873, Lo),
    R::single(0xA874, 0xA877, Po),
    R::single(0xA880, 0xA881, Mc),
    R::single(0xA882, 0xA8B3, Lo),
    R::single(0xA8B4, 0xA8C3, Mc),
    R::single(0xA8C4, 0xA8C5, Mn),
    R::single(0xA8CE, 0xA8CF, Po),
    R::single(0xA8D0, 0xA8D9, Nd),
    R::single(0xA8E0, 0xA8F1, Mn),
    R::single(0xA8F2, 0xA8F7, Lo),
    R::single(0xA8F8, 0xA8FA, Po),
    R::single(0xA8FB, 0xA8FB, Lo),
    R::single(0xA8FC, 0xA8FC, Po),
    R::single(0xA8FD, 0xA8FE, Lo),
    R::single(0xA8FF, 0xA8FF, Mn),
    R::single(0xA900, 0xA909, Nd),
    R::single(0xA90A, 0xA925, Lo),
    R::single(0xA926, 0xA92D, Mn),
    R::single(0xA92E, 0xA92F, Po),
    R::single(0xA930, 0xA946, Lo),
    R::single(0xA947, 0xA951, Mn),
    R::single(0xA952, 0xA953, Mc),
    R::single(0xA95F, 0xA95F, Po),
    R::single(0xA960, 0xA97C, Lo),
    R::single(0xA980, 0xA982, Mn),
    R::single(0xA983, 0xA983, Mc),
    R::single(0xA984, 0xA9B2, Lo),
    R::single(0xA9B3, 0xA9B3, Mn),
    R::single(0xA9B4, 0xA9B5, Mc),
    R::single(0xA9B6, 0xA9B9, Mn),
    R::single(0xA9BA, 0xA9BB, Mc),
    R::single(0xA9BC, 0xA9BD, Mn),
    R::single(0xA9BE, 0xA9C0, Mc),
    R::single(0xA9C1, 0xA9CD, Po),
    R::single(0xA9CF, 0xA9CF, Lm),
    R::single(0xA9D0, 0xA9D9, Nd),
    R::single(0xA9DE, 0xA9DF, Po),
    R::single(0xA9E0, 0xA9E4, Lo),
    R::single(0xA9E5, 0xA9E5, Mn),
    R::single(0xA9E6, 0xA9E6, Lm),
    R::single(0xA9E7, 0xA9EF, Lo),
    R::single(0xA9F0, 0xA9F9, Nd),
    R::single(0xA9FA, 0xA9FE, Lo),
    R::single(0xAA00, 0xAA28, Lo),
    R::single(0xAA29, 0xAA2E, Mn),
    R::single(0xAA2F, 0xAA30, Mc),
    R::single(0xAA31, 0xAA32, Mn),
    R::single(0xAA33, 0xAA34, Mc),
    R::single(0xAA35, 0xAA36, Mn),
    R::single(0xAA40, 0xAA42, Lo),
    R::single(0xAA43, 0xAA43, Mn),
    R::single(0xAA44, 0xAA4B, Lo),
    R::single(0xAA4C, 0xAA4C, Mn),
    R::single(0xAA4D, 0xAA4D, Mc),
    R::single(0xAA50, 0xAA59, Nd),
    R::single(0xAA5C, 0xAA5F, Po),
    R::single(0xAA60, 0xAA6F, Lo),
    R::single(0xAA70, 0xAA70, Lm),
    R::single(0xAA71, 0xAA76, Lo),
    R::single(0xAA77, 0xAA79, So),
    R::single(0xAA7A, 0xAA7A, Lo),
    R::single(0xAA7B, 0xAA7B, Mc),
    R::single(0xAA7C, 0xAA7C, Mn),
    R::single(0xAA7D, 0xAA7D, Mc),
    R::single(0xAA7E, 0xAAAF, Lo),
    R::single(0xAAB0, 0xAAB0, Mn),
    R::single(0xAAB1, 0xAAB1, Lo),
    R::single(0xAAB2, 0xAAB4, Mn),
    R::single(0xAAB5, 0xAAB6, Lo),
    R::single(0xAAB7, 0xAAB8, Mn),
    R::single(0xAAB9, 0xAABD, Lo),
    R::single(0xAABE, 0xAABF, Mn),
    R::single(0xAAC0, 0xAAC0, Lo),
    R::single(0xAAC1, 0xAAC1, Mn),
    R::single(0xAAC2, 0xAAC2, Lo),
    R::single(0xAADB, 0xAADC, Lo),
    R::single(0xAADD, 0xAADD, Lm),
    R::single(0xAADE, 0xAADF, Po),
    R::single(0xAAE0, 0xAAEA, Lo),
    R::single(0xAAEB, 0xAAEB, Mc),
    R::single(0xAAEC, 0xAAED, Mn),
    R::single(0xAAEE, 0xAAEF, Mc),
    R::single(0xAAF0, 0xAAF1, Po),
    R::single(0xAAF2, 0xAAF2, Lo),
    R::single(0xAAF3, 0xAAF4, Lm),
    R::single(0xAAF5, 0xAAF5, Mc),
    R::single(0xAAF6, 0xAAF6, Mn),
    R::single(0xAB01, 0xAB06, Lo),
    R::single(0xAB09, 0xAB0E, Lo),
    R::single(0xAB11, 0xAB16, Lo),
    R::single(0xAB20, 0xAB26, Lo),
    R::single(0xAB28, 0xAB2E, Lo),
    R::single(0xAB30, 0xAB5A, Ll),
    R::single(0xAB5B, 0xAB5B, Sk),
    R::single(0xAB5C, 0xAB5F, Lm),
    R::single(0xAB60, 0xAB68, Ll),
    R::single(0xAB69, 0xAB69, Lm),
    R::single(0xAB6A, 0xAB6B, Sk),
    R::single(0xAB70, 0xABBF, Ll),
    R::single(0xABC0, 0xABE2, Lo),
    R::single(0xABE3, 0xABE4, Mc),
    R::single(0xABE5, 0xABE5, Mn),
    R::single(0xABE6, 0xABE7, Mc),
    R::single(0xABE8, 0xABE8, Mn),
    R::single(0xABE9, 0xABEA, Mc),
    R::single(0xABEB, 0xABEB, Po),
    R::single(0xABEC, 0xABEC, Mc),
    R::single(0xABED, 0xABED, Mn),
    R::single(0xABF0, 0xABF9, Nd),
    R::single(0xAC00, 0xD7A3, Lo),
    R::single(0xD7B0, 0xD7C6, Lo),
    R::single(0xD7CB, 0xD7FB, Lo),
    R::single(0xD800, 0xDFFF, Cs),
    R::single(0xE000, 0xF8FF, Co),
    R::single(0xF900, 0xFA6D, Lo),
    R::single(0xFA70, 0xFAD9, Lo),
    R::single(0xFB00, 0xFB06, Ll),
    R::single(0xFB13, 0xFB17, Ll),
    R::single(0xFB1D, 0xFB1D, Lo),
    R::single(0xFB1E, 0xFB1E, Mn),
    R::single(0xFB1F, 0xFB28, Lo),
    R::single(0xFB29, 0xFB29, Sm),
    R::single(0xFB2A, 0xFB36, Lo),
    R::single(0xFB38, 0xFB3C, Lo),
    R::single(0xFB3E, 0xFB3E, Lo),
    R::single(0xFB40, 0xFB41, Lo),
    R::single(0xFB43, 0xFB44, Lo),
    R::single(0xFB46, 0xFBB1, Lo),
    R::single(0xFBB2, 0xFBC2, Sk),
    R::single(0xFBD3, 0xFD3D, Lo),
    R::single(0xFD3E, 0xFD3E, Pe),
    R::single(0xFD3F, 0xFD3F, Ps),
    R::single(0xFD40, 0xFD4F, So),
    R::single(0xFD50, 0xFD8F, Lo),
    R::single(0xFD92, 0xFDC7, Lo),
    R::single(0xFDCF, 0xFDCF, So),
    R::single(0xFDF0, 0xFDFB, Lo),
    R::single(0xFDFC, 0xFDFC, Sc),
    R::single(0xFDFD, 0xFDFF, So),
    R::single(0xFE00, 0xFE0F, Mn),
    R::single(0xFE10, 0xFE16, Po),
    R::single(0xFE17, 0xFE17, Ps),
    R::single(0xFE18, 0xFE18, Pe),
    R::single(0xFE19, 0xFE19, Po),
    R::single(0xFE20, 0xFE2F, Mn),
    R::single(0xFE30, 0xFE30, Po),
    R::single(0xFE31, 0xFE32, Pd),
    R::single(0xFE33, 0xFE34, Pc),
    R::alternating(0xFE35, 0xFE44, Pe, Ps),
    R::single(0xFE45, 0xFE46, Po),
    R::single(0xFE47, 0xFE47, Ps),
    R::single(0xFE48, 0xFE48, Pe),
    R::single(0xFE49, 0xFE4C, Po),
    R::single(0xFE4D, 0xFE4F, Pc),
    R::single(0xFE50, 0xFE52, Po),
    R::single(0xFE54, 0xFE57, Po),
    R::single(0xFE58, 0xFE58, Pd),
    R::alternating(0xFE59, 0xFE5E, Pe, Ps),
    R::single(0xFE5F, 0xFE61, Po),
    R::single(0xFE62, 0xFE62, Sm),
    R::single(0xFE63, 0xFE63, Pd),
    R::single(0xFE64, 0xFE66, Sm),
    R::single(0xFE68, 0xFE68, Po),
    R::single(0xFE69, 0xFE69, Sc),
    R::single(0xFE6A, 0xFE6B, Po),
    R::single(0xFE70, 0xFE74, Lo),
    R::single(0xFE76, 0xFEFC, Lo),
    R::single(0xFEFF, 0xFEFF, Cf),
    R::single(0xFF01, 0xFF03, Po),
    R::single(0xFF04, 0xFF04, Sc),
    R::single(0xFF05, 0xFF07, Po),
    R::single(0xFF08, 0xFF08, Ps),
    R::single(0xFF09, 0xFF09, Pe),
    R::single(0xFF0A, 0xFF0A, Po),
    R::single(0xFF0B, 0xFF0B, Sm),
    R::single(0xFF0C, 0xFF0C, Po),
    R::single(0xFF0D, 0xFF0D, Pd),
    R::single(0xFF0E, 0xFF0F, Po),
    R::single(0xFF10, 0xFF19, Nd),
    R::single(0xFF1A, 0xFF1B, Po),
    R::single(0xFF1C, 0xFF1E, Sm),
    R::single(0xFF1F, 0xFF20, Po),
    R::single(0xFF21, 0xFF3A, Lu),
    R::single(0xFF3B, 0xFF3B, Ps),
    R::single(0xFF3C, 0xFF3C, Po),
    R::single(0xFF3D, 0xFF3D, Pe),
    R::single(0xFF3E, 0xFF3E, Sk),
    R::single(0xFF3F, 0xFF3F, Pc),
    R::single(0xFF40, 0xFF40, Sk),
    R::single(0xFF41, 0xFF5A, Ll),
    R::single(0xFF5B, 0xFF5B, Ps),
    R::single(0xFF5C, 0xFF5C, Sm),
    R::single(0xFF5D, 0xFF5D, Pe),
    R::single(0xFF5E, 0xFF5E, Sm),
    R::single(0xFF5F, 0xFF5F, Ps),
    R::single(0xFF60, 0xFF60, Pe),
    R::single(0xFF61, 0xFF61, Po),
    R::single(0xFF62, 0xFF62, Ps),
    R::single(0xFF63, 0xFF63, Pe),
    R::single(0xFF64, 0xFF65, Po),
    R::single(0xFF66, 0xFF6F, Lo),
    R::single(0xFF70, 0xFF70, Lm),
    R::single(0xFF71, 0xFF9D, Lo),
    R::single(0xFF9E, 0xFF9F, Lm),
    R::single(0xFFA0, 0xFFBE, Lo),
    R::single(0xFFC2, 0xFFC7, Lo),
    R::single(0xFFCA, 0xFFCF, Lo),
    R::single(0xFFD2, 0xFFD7, Lo),
    R::single(0xFFDA, 0xFFDC, Lo),
    R::single(0xFFE0, 0xFFE1, Sc),
    R::single(0xFFE2, 0xFFE2, Sm),
    R::single(0xFFE3, 0xFFE3, Sk),
    R::single(0xFFE4, 0xFFE4, So),
    R::single(0xFFE5, 0xFFE6, Sc),
    R::single(0xFFE8, 0xFFE8, So),
    R::single(0xFFE9, 0xFFEC, Sm),
    R::single(0xFFED, 0xFFEE, So),
    R::single(0xFFF9, 0xFFFB, Cf),
    R::single(0xFFFC, 0xFFFD, So),
    R::single(0x10000, 0x1000B, Lo),
    R::single(0x1000D, 0x10026, Lo),
    R::single(0x10028, 0x1003A, Lo),
    R::single(0x1003C, 0x1003D, Lo),
    R::single(0x1003F, 0x1004D, Lo),
    R::single(0x10050, 0x1005D, Lo),
    R::single(0x10080, 0x100FA, Lo),
    R::single(0x10100, 0x10102, Po),
    R::single(0x10107, 0x10133, No),
    R::single(0x10137, 0x1013F, So),
    R::single(0x10140, 0x10174, Nl),
    R::single(0x10175, 0x10178, No),
    R::single(0x10179, 0x10189, So),
    R::single(0x1018A, 0x1018B, No),
    R::single(0x1018C, 0x1018E, So),
    R::single(0x10190, 0x1019C, So),
    R::single(0x101A0, 0x101A0, So),
    R::single(0x101D0, 0x101FC, So),
    R::single(0x101FD, 0x101FD, Mn),
    R::single(0x10280, 0x1029C, Lo),
    R::single(0x102A0, 0x102D0, Lo),
    R::single(0x102E0, 0x102E0, Mn),
    R::single(0x102E1, 0x102FB, No),
    R::single(0x10300, 0x1031F, Lo),
    R::single(0x10320, 0x10323, No),
    R::single(0x1032D, 0x10340, Lo),
    R::single(0x10341, 0x10341, Nl),
    R::single(0x10342, 0x10349, Lo),
    R::single(0x1034A, 0x1034A, Nl),
    R::single(0x10350, 0x10375, Lo),
    R::single(0x10376, 0x1037A, Mn),
    R::single(0x10380, 0x1039D, Lo),
    R::single(0x1039F, 0x1039F, Po),
    R::single(0x103A0, 0x103C3, Lo),
    R::single(0x103C8, 0x103CF, Lo),
    R::single(0x103D0, 0x103D0, Po),
    R::single(0x103D1, 0x103D5, Nl),
    R::single(0x10400, 0x10427, Lu),
    R::single(0x10428, 0x1044F, Ll),
    R::single(0x10450, 0x1049D, Lo),
    R::single(0x104A0, 0x104A9, Nd),
    R::single(0x104B0, 0x104D3, Lu),
    R::single(0x104D8, 0x104FB, Ll),
    R::single(0x10500, 0x10527, Lo),
    R::single(0x10530, 0x10563, Lo),
    R::single(0x1056F, 0x1056F, Po),
    R::single(0x10570, 0x1057A, Lu),
    R::single(0x1057C, 0x1058A, Lu),
    R::single(0x1058C, 0x10592, Lu),
    R::single(0x10594, 0x10595, Lu),
    R::single(0x10597, 0x105A1, Ll),
    R::single(0x105A3, 0x105B1, Ll),
    R::single(0x105B3, 0x105B9, Ll),
    R::single(0x105BB, 0x105BC, Ll),
    R::single(0x10600, 0x10736, Lo),
    R::single(0x10740, 0x10755, Lo),
    R::single(0x10760, 0x10767, Lo),
    R::single(0x10780, 0x10785, Lm),
    R::single(0x10787, 0x107B0, Lm),
    R::single(0x107B2, 0x107BA, Lm),
    R::single(0x10800, 0x10805, Lo),
    R::single(0x10808, 0x10808, Lo),
    R::single(0x1080A, 0x10835, Lo),
    R::single(0x10837, 0x10838, Lo),
    R::single(0x1083C, 0x1083C, Lo),
    R::single(0x1083F, 0x10855, Lo),
    R::single(0x10857, 0x10857, Po),
    R::single(0x10858, 0x1085F, No),
    R::single(0x10860, 0x10876, Lo),
    R::single(0x10877, 0x10878, So),
    R::single(0x10879, 0x1087F, No),
    R::single(0x10880, 0x1089E, Lo),
    R::single(0x108A7, 0x108AF, No),
    R::single(0x108E0, 0x108F2, Lo),
    R::single(0x108F4, 0x108F5, Lo),
    R::single(0x108FB, 0x108FF, No),
    R::single(0x10900, 0x10915, Lo),
    R::single(0x10916, 0x1091B, No),
    R::single(0x1091F, 0x1091F, Po),
    R::single(0x10920, 0x10939, Lo),
    R::single(0x1093F, 0x1093F, Po),
    R::single(0x10980, 0x109B7, Lo),
    R::single(0x109BC, 0x109BD, No),
    R::single(0x109BE, 0x109BF, Lo),
    R::single(0x109C0, 0x109CF, No),
    R::single(0x109D2, 0x109FF, No),
    R::single(0x10A00, 0x10A00, Lo),
    R::single(0x10A01, 0x10A03, Mn),
    R::single(0x10A05, 0x10A06, Mn),
    R::single(0x10A0C, 0x10A0F, Mn),
    R::single(0x10A10, 0x10A13, Lo),
    R::single(0x10A15, 0x10A17, Lo),
    R::single(0x10A19, 0x10A35, Lo),
    R::single(0x10A38, 0x10A3A, Mn),
    R::single(0x10A3F, 0x10A3F, Mn),
    R::single(0x10A40, 0x10A48, No),
    R::single(0x10A50, 0x10A58, Po),
    R::single(0x10A60, 0x10A7C, Lo),
    R::single(0x10A7D, 0x10A7E, No),
    R::single(0x10A7F, 0x10A7F, Po),
    R::single(0x10A80, 0x10A9C, Lo),
    R::single(0x10A9D, 0x10A9F, No),
    R::single(0x10AC0, 0x10AC7, Lo),
    R::single(0x10AC8, 0x10AC8, So),
    R::single(0x10AC9, 0x10AE4, Lo),
    R::single(0x10AE5, 0x10AE6, Mn),
    R::single(0x10AEB, 0x10AEF, No),
    R::single(0x10AF0, 0x10AF6, Po),
    R::single(0x10B00, 0x10B35, Lo),
    R::single(0x10B39, 0x10B3F, Po),
    R::single(0x10B40, 0x10B55, Lo),
    R::single(0x10B58, 0x10B5F, No),
    R::single(0x10B60, 0x10B72, Lo),
    R::single(0x10B78, 0x10B7F, No),
    R::single(0x10B80, 0x10B91, Lo),
    R::single(0x10B99, 0x10B9C, Po),
    R::single(0x10BA9, 0x10BAF, No),
    R::single(0x10C00, 0x10C48, Lo),
    R::single(0x10C80, 0x10CB2, Lu),
    R::single(0x10CC0, 0x10CF2, Ll),
    R::single(0x10CFA, 0x10CFF, No),
    R::single(0x10D00, 0x10D23, Lo),
    R::single(0x10D24, 0x10D27, Mn),
    R::single(0x10D30, 0x10D39, Nd),
    R::single(0x10E60, 0x10E7E, No),
    R::single(0x10E80, 0x10EA9, Lo),
    R::single(0x10EAB, 0x10EAC, Mn),
    R::single(0x10EAD, 0x10EAD, Pd),
    R::single(0x10EB0, 0x10EB1, Lo),
    R::single(0x10F00, 0x10F1C, Lo),
    R::single(0x10F1D, 0x10F26, No),
    R::single(0x10F27, 0x10F27, Lo),
    R::single(0x10F30, 0x10F45, Lo),
    R::single(0x10F46, 0x10F50, Mn),
    R::single(0x10F51, 0x10F54, No),
    R::single(0x10F55, 0x10F59, Po),
    R::single(0x10F70, 0x10F81, Lo),
    R::single(0x10F82, 0x10F85, Mn),
    R::single(0x10F86, 0x10F89, Po),
    R::single(0x10FB0, 0x10FC4, Lo),
    R::single(0x10FC5, 0x10FCB, No),
    R::single(0x10FE0, 0x10FF6, Lo),
    R::single(0x11000, 0x11000, Mc),
    R::single(0x11001, 0x11001, Mn),
    R::single(0x11002, 0x11002, Mc),
    R::single(0x11003, 0x11037, Lo),
    R::single(0x11038, 0x11046, Mn),
    R::single(0x11047, 0x1104D, Po),
    R::single(0x11052, 0x11065, No),
    R::single(0x11066, 0x1106F, Nd),
    R::single(0x11070, 0x11070, Mn),
    R::single(0x11071, 0x11072, Lo),
    R::single(0x11073, 0x11074, Mn),
    R::single(0x11075, 0x11075, Lo),
    R::single(0x1107F, 0x11081, Mn),
    R::single(0x11082, 0x11082, Mc),
    R::single(0x11083, 0x110AF, Lo),
    R::single(0x110B0, 0x110B2, Mc),
    R::single(0x110B3, 0x110B6, Mn),
    R::single(0x110B7, 0x110B8, Mc),
    R::single(0x110B9, 0x110BA, Mn),
    R::single(0x110BB, 0x110BC, Po),
    R::single(0x110BD, 0x110BD, Cf),
    R::single(0x110BE, 0x110C1, Po),
    R::single(0x110C2, 0x110C2, Mn),
    R::single(0x110CD, 0x110CD, Cf),
    R::single(0x110D0, 0x110E8, Lo),
    R::single(0x110F0, 0x110F9, Nd),
    R::single(0x11100, 0x11102, Mn),
    R::single(0x11103, 0x11126, Lo),
    R::single(0x11127, 0x1112B, Mn),
    R::single(0x1112C, 0x1112C, Mc),
    R::single(0x1112D, 0x11134, Mn),
    R::single(0x11136, 0x1113F, Nd),
    R::single(0x11140, 0x11143, Po),
    R::single(0x11144, 0x11144, Lo),
    R::single(0x11145, 0x11146, Mc),
    R::single(0x11147, 0x11147, Lo),
    R::single(0x11150, 0x11172, Lo),
    R::single(0x11173, 0x11173, Mn),
    R::single(0x11174, 0x11175, Po),
    R::single(0x11176, 0x11176, Lo),
    R::single(0x11180, 0x11181, Mn),
    R::single(0x11182, 0x11182, Mc),
    R::single(0x11183, 0x111B2, Lo),
    R::single(0x111B3, 0x111B5, Mc),
    R::single(0x111B6, 0x111BE, Mn),
    R::single(0x111BF, 0x111C0, Mc),
    R::single(0x111C1, 0x111C4, Lo),
    R::single(0x111C5, 0x111C8, Po),
    R::single(0x111C9, 0x111CC, Mn),
    R::single(0x111CD, 0x111CD, Po),
    R::single(0x111CE, 0x111CE, Mc),
    R::single(0x111CF, 0x111CF, Mn),
    R::single(0x111D0, 0x111D9, Nd),
    R::alternating(0x111DA, 0x111DD, Lo, Po),
    R::single(0x111DE, 0x111DF, Po),
    R::single(0x111E1, 0x111F4, No),
    R::single(0x11200, 0x11211, Lo),
    R::single(0x11213, 0x1122B, Lo),
    R::single(0x1122C, 0x1122E, Mc),
    R::single(0x1122F, 0x11231, Mn),
    R::single(0x11232, 0x11233, Mc),
    R::single(0x11234, 0x11234, Mn),
    R::single(0x11235, 0x11235, Mc),
    R::single(0x11236, 0x11237, Mn),
    R::single(0x11238, 0x1123D, Po),
    R::single(0x1123E, 0x1123E, Mn),
    R::single(0x11280, 0x11286, Lo),
    R::single(0x11288, 0x11288, Lo),
    R::single(0x1128A, 0x1128D, Lo),
    R::single(0x1128F, 0x1129D, Lo),
    R::single(0x1129F, 0x112A8, Lo),
    R::single(0x112A9, 0x112A9, Po),
    R::single(0x112B0, 0x112DE, Lo),
    R::single(0x112DF, 0x112DF, Mn),
    R::single(0x112E0, 0x112E2, Mc),
    R::single(0x112E3, 0x112EA, Mn),
    R::single(0x112F0, 0x112F9, Nd),
    R::single(0x11300, 0x11301, Mn),
    R::single(0x11302, 0x11303, Mc),
    R::single(0x11305, 0x1130C, Lo),
    R::single(0x1130F, 0x11310, Lo),
    R::single(0x11313, 0x11328, Lo),
    R::single(0x1132A, 0x11330, Lo),
    R::single(0x11332, 0x11333, Lo),
    R::single(0x11335, 0x11339, Lo),
    R::single(0x1133B, 0x1133C, Mn),
    R::single(0x1133D, 0x1133D, Lo),
    R::single(0x1133E, 0x1133F, Mc),
    R::single(0x11340, 0x11340, Mn),
    R::single(0x11341, 0x11344, Mc),
    R::single(0x11347, 0x11348, Mc),
    R::single(0x1134B, 0x1134D, Mc),
    R::single(0x11350, 0x11350, Lo),
    R::single(0x11357, 0x11357, Mc),
    R::single(0x1135D, 0x11361, Lo),
    R::single(0x11362, 0x11363, Mc),
    R::single(0x11366, 0x1136C, Mn),
    R::single(0x11370, 0x11374, Mn),
    R::single(0x11400, 0x11434, Lo),
    R::single(0x11435, 0x11437, Mc),
    R::single(0x11438, 0x1143F, Mn),
    R::single(0x11440, 0x11441, Mc),
    R::single(0x11442, 0x11444, Mn),
    R::single(0x11445, 0x11445, Mc),
    R::single(0x11446, 0x11446, Mn),
    R::single(0x11447, 0x1144A, Lo),
    R::single(0x1144B, 0x1144F, Po),
    R::single(0x11450, 0x11459, Nd),
    R::single(0x1145A, 0x1145B, Po),
    R::single(0x1145D, 0x1145D, Po),
    R::single(0x1145E, 0x1145E, Mn),
    R::single(0x1145F, 0x11461, Lo),
    R::single(0x11480, 0x114AF, Lo),
    R::single(0x114B0, 0x114B2, Mc),
    R::single(0x114B3, 0x114B8, Mn),
    R::single(0x114B9, 0x114B9, Mc),
    R::single(0x114BA, 0x114BA, Mn),
    R::single(0x114BB, 0x114BE, Mc),
    R::single(0x114BF, 0x114C0, Mn),
    R::single(0x114C1, 0x114C1, Mc),
    R::single(0x114C2, 0x114C3, Mn),
    R::single(0x114C4, 0x114C5, Lo),
    R::single(0x114C6, 0x114C6, Po),
    R::single(0x114C7, 0x114C7, Lo),
    R::single(0x114D0, 0x114D9, Nd),
    R::single(0x11580, 0x115AE, Lo),
    R::single(0x115AF, 0x115B1, Mc),
    R::single(0x115B2, 0x115B5, Mn),
    R::single(0x115B8, 0x115BB, Mc),
    R::single(0x115BC, 0x115BD, Mn),
    R::single(0x115BE, 0x115BE, Mc),
    R::single(0x115BF, 0x115C0, Mn),
    R::single(0x115C1, 0x115D7, Po),
    R::single(0x115D8, 0x115DB, Lo),
    R::single(0x115DC, 0x115DD, Mn),
    R::single(0x11600, 0x1162F, Lo),
    R::single(0x11630, 0x11632, Mc),
    R::single(0x11633, 0x1163A, Mn),
    R::single(0x1163B, 0x1163C, Mc),
    R::single(0x1163D, 0x1163D, Mn),
    R::single(0x1163E, 0x1163E, Mc),
    R::single(0x1163F, 0x11640, Mn),
    R::single(0x11641, 0x11643, Po),
    R::single(0x11644, 0x11644, Lo),
    R::single(0x11650, 0x11659, Nd),
    R::single(0x11660, 0x1166C, Po),
    R::single(0x11680, 0x116AA, Lo),
    R::alternating(0x116AB, 0x116AE, Mc, Mn),
    R::single(0x116AF, 0x116AF, Mc),
    R::single(0x116B0, 0x116B5, Mn),
    R::single(0x116B6, 0x116B6, Mc),
    R::single(0x116B7, 0x116B7, Mn),
    R::single(0x116B8, 0x116B8, Lo),
    R::single(0x116B9, 0x116B9, Po),
    R::single(0x116C0, 0x116C9, Nd),
    R::single(0x11700, 0x1171A, Lo),
    R::single(0x1171D, 0x1171F, Mn),
    R::single(0x11720, 0x11721, Mc),
    R::single(0x11722, 0x11725, Mn),
    R::single(0x11726, 0x11726, Mc),
    R::single(0x11727, 0x1172B, Mn),
    R::single(0x11730, 0x11739, Nd),
    R::single(0x1173A, 0x1173B, No),
    R::single(0x1173C, 0x1173E, Po),
    R::single(0x1173F, 0x1173F, So),
    R::single(0x11740, 0x11746, Lo),
    R::single(0x11800, 0x1182B, Lo),
    R::single(0x1182C, 0x1182E, Mc),
    R::single(0x1182F, 0x11837, Mn),
    R::single(0x11838, 0x11838, Mc),
    R::single(0x11839, 0x1183A, Mn),
    R::single(0x1183B, 0x1183B, Po),
    R::single(0x118A0, 0x118BF, Lu),
    R::single(0x118C0, 0x118DF, Ll),
    R::single(0x118E0, 0x118E9, Nd),
    R::single(0x118EA, 0x118F2, No),
    R::single(0x118FF, 0x11906, Lo),
    R::single(0x11909, 0x11909, Lo),
    R::single(0x1190C, 0x11913, Lo),
    R::single(0x11915, 0x11916, Lo),
    R::single(0x11918, 0x1192F, Lo),
    R::single(0x11930, 0x11935, Mc),
    R::single(0x11937, 0x11938, Mc),
    R::single(0x1193B, 0x1193C, Mn),
    R::single(0x1193D, 0x1193D, Mc),
    R::single(0x1193E, 0x1193E, Mn),
    R::alternating(0x1193F, 0x11942, Mc, Lo),
    R::single(0x11943, 0x11943, Mn),
    R::single(0x11944, 0x11946, Po),
    R::single(0x11950, 0x11959, Nd),
    R::single(0x119A0, 0x119A7, Lo),
    R::single(0x119AA, 0x119D0, Lo),
    R::single(0x119D1, 0x119D3, Mc),
    R::single(0x119D4, 0x119D7, Mn),
    R::single(0x119DA, 0x119DB, Mn),
    R::single(0x119DC, 0x119DF, Mc),
    R::single(0x119E0, 0x119E0, Mn),
    R::single(0x119E1, 0x119E1, Lo),
    R::single(0x119E2, 0x119E2, Po),
    R::single(0x119E3, 0x119E3, Lo),
    R::single(0x119E4, 0x119E4, Mc),
    R::single(0x11A00, 0x11A00, Lo),
    R::single(0x11A01, 0x11A0A, Mn),
    R::single(0x11A0B, 0x11A32, Lo),
    R::single(0x11A33, 0x11A38, Mn),
    R::single(0x11A39, 0x11A39, Mc),
    R::single(0x11A3A, 0x11A3A, Lo),
    R::single(0x11A3B, 0x11A3E, Mn),
    R::single(0x11A3F, 0x11A46, Po),
    R::single(0x11A47, 0x11A47, Mn),
    R::single(0x11A50, 0x11A50, Lo),
    R::single(0x11A51, 0x11A56, Mn),
    R::single(0x11A57, 0x11A58, Mc),
    R::single(0x11A59, 0x11A5B, Mn),
    R::single(0x11A5C, 0x11A89, Lo),
    R::single(0x11A8A, 0x11A96, Mn),
    R::single(0x11A97, 0x11A97, Mc),
    R::single(0x11A98, 0x11A99, Mn),
    R::single(0x11A9A, 0x11A9C, Po),
    R::single(0x11A9D, 0x11A9D, Lo),
    R::single(0x11A9E, 0x11AA2, Po),
    R::single(0x11AB0, 0x11AF8, Lo),
    R::single(0x11C00, 0x11C08, Lo),
    R::single(0x11C0A, 0x11C2E, Lo),
    R::single(0x11C2F, 0x11C2F, Mc),
    R::single(0x11C30, 0x11C36, Mn),
    R::single(0x11C38, 0x11C3D, Mn),
    R::single(0x11C3E, 0x11C3E, Mc),
    R::single(0x11C3F, 0x11C3F, Mn),
    R::single(0x11C40, 0x11C40, Lo),
    R::single(0x11C41, 0x11C45, Po),
    R::single(0x11C50, 0x11C59, Nd),
    R::single(0x11C5A, 0x11C6C, No),
    R::single(0x11C70, 0x11C71, Po),
    R::single(0x11C72, 0x11C8F, Lo),
    R::single(0x11C92, 0x11CA7, Mn),
    R::single(0x11CA9, 0x11CA9, Mc),
    R::single(0x11CAA, 0x11CB0, Mn),
    R::single(0x11CB1, 0x11CB1, Mc),
    R::single(0x11CB2, 0x11CB3, Mn),
    R::single(0x11CB4, 0x11CB4, Mc),
    R::single(0x11CB5, 0x11CB6, Mn),
    R::single(0x11D00, 0x11D06, Lo),
    R::single(0x11D08, 0x11D09, Lo),
    R::single(0x11D0B, 0x11D30, Lo),
    R::single(0x11D31, 0x11D36, Mn),
    R::single(0x11D3A, 0x11D3A, Mn),
    R::single(0x11D3C, 0x11D3D, Mn),
    R::single(0x11D3F, 0x11D45, Mn),
    R::single(0x11D46, 0x11D46, Lo),
    R::single(0x11D47, 0x11D47, Mn),
    R::single(0x11D50, 0x11D59, Nd),
    R::single(0x11D60, 0x11D65, Lo),
    R::single(0x11D67, 0x11D68, Lo),
    R::single(0x11D6A, 0x11D89, Lo),
    R::single(0x11D8A, 0x11D8E, Mc),
    R::single(0x11D90, 0x11D91, Mn),
    R::single(0x11D93, 0x11D94, Mc),
    R::single(0x11D95, 0x11D95, Mn),
    R::single(0x11D96, 0x11D96, Mc),
    R::single(0x11D97, 0x11D97, Mn),
    R::single(0x11D98, 0x11D98, Lo),
    R::single(0x11DA0, 0x11DA9, Nd),
    R::single(0x11EE0, 0x11EF2, Lo),
    R::single(0x11EF3, 0x11EF4, Mn),
    R::single(0x11EF5, 0x11EF6, Mc),
    R::single(0x11EF7, 0x11EF8, Po),
    R::single(0x11FB0, 0x11FB0, Lo),
    R::single(0x11FC0, 0x11FD4, No),
    R::single(0x11FD5, 0x11FDC, So),
    R::single(0x11FDD, 0x11FE0, Sc),
    R::single(0x11FE1, 0x11FF1, So),
    R::single(0x11FFF, 0x11FFF, Po),
    R::single(0x12000, 0x12399, Lo),
    R::single(0x12400, 0x1246E, Nl),
    R::single(0x12470, 0x12474, Po),
    R::single(0x12480, 0x12543, Lo),
    R::single(0x12F90, 0x12FF0, Lo),
    R::single(0x12FF1, 0x12FF2, Po),
    R::single(0x13000, 0x1342E, Lo),
    R::single(0x13430, 0x13438, Cf),
    R::single(0x14400, 0x14646, Lo),
    R::single(0x16800, 0x16A38, Lo),
    R::single(0x16A40, 0x16A5E, Lo),
    R::single(0x16A60, 0x16A69, Nd),
    R::single(0x16A6E, 0x16A6F, Po),
    R::single(0x16A70, 0x16ABE, Lo),
    R::single(0x16AC0, 0x16AC9, Nd),
    R::single(0x16AD0, 0x16AED, Lo),
    R::single(0x16AF0, 0x16AF4, Mn),
    R::single(0x16AF5, 0x16AF5, Po),
    R::single(0x16B00, 0x16B2F, Lo),
    R::single(0x16B30, 0x16B36, Mn),
    R::single(0x16B37, 0x16B3B, Po),
    R::single(0x16B3C, 0x16B3F, So),
    R::single(0x16B40, 0x16B43, Lm),
    R::single(0x16B44, 0x16B44, Po),
    R::single(0x16B45, 0x16B45, So),
    R::single(0x16B50, 0x16B59, Nd),
    R::single(0x16B5B, 0x16B61, No),
    R::single(0x16B63, 0x16B77, Lo),
    R::single(0x16B7D, 0x16B8F, Lo),
    R::single(0x16E40, 0x16E5F, Lu),
    R::single(0x16E60, 0x16E7F, Ll),
    R::single(0x16E80, 0x16E96, No),
    R::single(0x16E97, 0x16E9A, Po),
    R::single(0x16F00, 0x16F4A, Lo),
    R::single(0x16F4F, 0x16F4F, Mn),
    R::single(0x16F50, 0x16F50, Lo),
    R::single(0x16F51, 0x16F87, Mc),
    R::single(0x16F8F, 0x16F92, Mn),
    R::single(0x16F93, 0x16F9F, Lm),
    R::single(0x16FE0, 0x16FE1, Lm),
    R::single(0x16FE2, 0x16FE2, Po),
    R::single(0x16FE3, 0x16FE3, Lm),
    R::single(0x16FE4, 0x16FE4, Mn),
    R::single(0x16FF0, 0x16FF1, Mc),
    R::single(0x17000, 0x187F7, Lo),
    R::single(0x18800, 0x18CD5, Lo),
    R::single(0x18D00, 0x18D08, Lo),
    R::single(0x1AFF0, 0x1AFF3, Lm),
    R::single(0x1AFF5, 0x1AFFB, Lm),
    R::single(0x1AFFD, 0x1AFFE, Lm),
    R::single(0x1B000, 0x1B122, Lo),
    R::single(0x1B150, 0x1B152, Lo),
    R::single(0x1B164, 0x1B167, Lo),
    R::single(0x1B170, 0x1B2FB, Lo),
    R::single(0x1BC00, 0x1BC6A, Lo),
    R::single(0x1BC70, 0x1BC7C, Lo),
    R::single(0x1BC80, 0x1BC88, Lo),
    R::single(0x1BC90, 0x1BC99, Lo),
    R::single(0x1BC9C, 0x1BC9C, So),
    R::single(0x1BC9D, 0x1BC9E, Mn),
    R::single(0x1BC9F, 0x1BC9F, Po),
    R::single(0x1BCA0, 0x1BCA3, Cf),
    R::single(0x1CF00, 0x1CF2D, Mn),
    R::single(0x1CF30, 0x1CF46, Mn),
    R::single(0x1CF50, 0x1CFC3, So),
    R::single(0x1D000, 0x1D0F5, So),
    R::single(0x1D100, 0x1D126, So),
    R::single(0x1D129, 0x1D164, So),
    R::single(0x1D165, 0x1D166, Mc),
    R::single(0x1D167, 0x1D169, Mn),
    R::single(0x1D16A, 0x1D16C, So),
    R::single(0x1D16D, 0x1D172, Mc),
    R::single(0x1D173, 0x1D17A, Cf),
    R::single(0x1D17B, 0x1D182, Mn),
    R::single(0x1D183, 0x1D184, So),
    R::single(0x1D185, 0x1D18B, Mn),
    R::single(0x1D18C, 0x1D1A9, So),
    R::single(0x1D1AA, 0x1D1AD, Mn),
    R::single(0x1D1AE, 0x1D1EA, So),
    R::single(0x1D200, 0x1D241, So),
    R::single(0x1D242, 0x1D244, Mn),
    R::single(0x1D245, 0x1D245, So),
    R::single(0x1D2E0, 0x1D2F3, No),
    R::single(0x1D300, 0x1D356, So),
    R::single(0x1D360, 0x1D378, No),
    R::single(0x1D400, 0x1D419, Lu),
    R::single(0x1D41A, 0x1D433, Ll),
    R::single(0x1D434, 0x1D44D, Lu),
    R::single(0x1D44E, 0x1D454, Ll),
    R::single(0x1D456, 0x1D467, Ll),
    R::single(0x1D468, 0x1D481, Lu),
    R::single(0x1D482, 0x1D49B, Ll),
    R::single(0x1D49C, 0x1D49C, Lu),
    R::single(0x1D49E, 0x1D49F, Lu),
    R::single(0x1D4A2, 0x1D4A2, Lu),
    R::single(0x1D4A5, 0x1D4A6, Lu),
    R::single(0x1D4A9, 0x1D4AC, Lu),
    R::single(0x1D4AE, 0x1D4B5, Lu),
    R::single(0x1D4B6, 0x1D4B9, Ll),
    R::single(0x1D4BB, 0x1D4BB, Ll),
    R::single(0x1D4BD, 0x1D4C3, Ll),
    R::single(0x1D4C5, 0x1D4CF, Ll),
    R::single(0x1D4D0, 0x1D4E9, Lu),
    R::single(0x1D4EA, 0x1D503, Ll),
    R::single(0x1D504, 0x1D505, Lu),
    R::single(0x1D507, 0x1D50A, Lu),
    R::single(0x1D50D, 0x1D514, Lu),
    R::single(0x1D516, 0x1D51C, Lu),
    R::single(0x1D51E, 0x1D537, Ll),
    R::single(0x1D538, 0x1D539, Lu),
    R::single(0x1D53B, 0x1D53E, Lu),
    R::single(0x1D540, 0x1D544, Lu),
    R::single(0x1D546, 0x1D546, Lu),
    R::single(0x1D54A, 0x1D550, Lu),
    R::single(0x1D552, 0x1D56B, Ll),
    R::single(0x1D56C, 0x1D585, Lu),
    R::single(0x1D586, 0x1D59F, Ll),
    R::single(0x1D5A0, 0x1D5B9, Lu),
    R::single(0x1D5BA, 0x1D5D3, Ll),
    R::single(0x1D5D4, 0x1D5ED, Lu),
    R::single(0x1D5EE, 0x1D607, Ll),
    R::single(0x1D608, 0x1D621, Lu),
    R::single(0x1D622, 0x1D63B, Ll),
    R::single(0x1D63C, 0x1D655, Lu),
    R::single(0x1D656, 0x1D66F, Ll),
    R::single(0x1D670, 0x1D689, Lu),
    R::single(0x1D68A, 0x1D6A5, Ll),
    R::single(0x1D6A8, 0x1D6C0, Lu),
    R::single(0x1D6C1, 0x1D6C1, Sm),
    R::single(0x1D6C2, 0x1D6DA, Ll),
    R::single(0x1D6DB, 0x1D6DB, Sm),
    R::single(0x1D6DC, 0x1D6E1, Ll),
    R::single(0x1D6E2, 0x1D6FA, Lu),
    R::single(0x1D6FB, 0x1D6FB, Sm),
    R::single(0x1D6FC, 0x1D714, Ll),
    R::single(0x1D715, 0x1D715, Sm),
    R::single(0x1D716, 0x1D71B, Ll),
    R::single(0x1D71C, 0x1D734, Lu),
    R::single(0x1D735, 0x1D735, Sm),
    R::single(0x1D736, 0x1D74E, Ll),
    R::single(0x1D74F, 0x1D74F, Sm),
    R::single(0x1D750, 0x1D755, Ll),
    R::single(0x1D756, 0x1D76E, Lu),
    R::single(0x1D76F, 0x1D76F, Sm),
    R::single(0x1D770, 0x1D788, Ll),
    R::single(0x1D789, 0x1D789, Sm),
    R::single(0x1D78A, 0x1D78F, Ll),
    R::single(0x1D790, 0x1D7A8, Lu),
    R::single(0x1D7A9, 0x1D7A9, Sm),
    R::single(0x1D7AA, 0x1D7C2, Ll),
    R::single(0x1D7C3, 0x1D7C3, Sm),
    R::single(0x1D7C4, 0x1D7C9, Ll),
    R::single(0x1D7CA, 0x1D7CA, Lu),
    R::single(0x1D7CB, 0x1D7CB, Ll),
    R::single(0x1D7CE, 0x1D7FF, Nd),
    R::single(0x1D800, 0x1D9FF, So),
    R::single(0x1DA00, 0x1DA36, Mn),
    R::single(0x1DA37, 0x1DA3A, So),
    R::single(0x1DA3B, 0x1DA6C, Mn),
    R::single(0x1DA6D, 0x1DA74, So),
    R::single(0x1DA75, 0x1DA75, Mn),
    R::single(0x1DA76, 0x1DA83, So),
    R::single(0x1DA84, 0x1DA84, Mn),
    R::single(0x1DA85, 0x1DA86, So),
    R::single(0x1DA87, 0x1DA8B, Po),
    R::single(0x1DA9B, 0x1DA9F, Mn),
    R::single(0x1DAA1, 0x1DAAF, Mn),
    R::single(0x1DF00, 0x1DF09, Ll),
    R::single(0x1DF0A, 0x1DF0A, Lo),
    R::single(0x1DF0B, 0x1DF1E, Ll),
    R::single(0x1E000, 0x1E006, Mn),
    R::single(0x1E008, 0x1E018, Mn),
    R::single(0x1E01B, 0x1E021, Mn),
    R::single(0x1E023, 0x1E024, Mn),
    R::single(0x1E026, 0x1E02A, Mn),
    R::single(0x1E100, 0x1E12C, Lo),
    R::single(0x1E130, 0x1E136, Mn),
    R::single(0x1E137, 0x1E13D, Lm),
    R::single(0x1E140, 0x1E149, Nd),
    R::single(0x1E14E, 0x1E14E, Lo),
    R::single(0x1E14F, 0x1E14F, So),
    R::single(0x1E290, 0x1E2AD, Lo),
    R::single(0x1E2AE, 0x1E2AE, Mn),
    R::single(0x1E2C0, 0x1E2EB, Lo),
    R::single(0x1E2EC, 0x1E2EF, Mn),
    R::single(0x1E2F0, 0x1E2F9, Nd),
    R::single(0x1E2FF, 0x1E2FF, Sc),
    R::single(0x1E7E0, 0x1E7E6, Lo),
    R::single(0x1E7E8, 0x1E7EB, Lo),
    R::single(0x1E7ED, 0x1E7EE, Lo),
    R::single(0x1E7F0, 0x1E7FE, Lo),
    R::single(0x1E800, 0x1E8C4, Lo),
    R::single(0x1E8C7, 0x1E8CF, No),
    R::single(0x1E8D0, 0x1E8D6, Mn),
    R::single(0x1E900, 0x1E921, Lu),
    R::single(0x1E922, 0x1E943, Ll),
    R::single(0x1E944, 0x1E94A, Mn),
    R::single(0x1E94B, 0x1E94B, Lm),
    R::single(0x1E950, 0x1E959, Nd),
    R::single(0x1E95E, 0x1E95F, Po),
    R::single(0x1EC71, 0x1ECAB, No),
    R::single(0x1ECAC, 0x1ECAC, So),
    R::single(0x1ECAD, 0x1ECAF, No),
    R::single(0x1ECB0, 0x1ECB0, Sc),
    R::single(0x1ECB1, 0x1ECB4, No),
    R::single(0x1ED01, 0x1ED2D, No),
    R::single(0x1ED2E, 0x1ED2E, So),
    R::single(0x1ED2F, 0x1ED3D, No),
    R::single(0x1EE00, 0x1EE03, Lo),
    R::single(0x1EE05, 0x1EE1F, Lo),
    R::single(0x1EE21, 0x1EE22, Lo),
    R::single(0x1EE24, 0x1EE24, Lo),
    R::single(0x1EE27, 0x1EE27, Lo),
    R::single(0x1EE29, 0x1EE32, Lo),
    R::single(0x1EE34, 0x1EE37, Lo),
    R::single(0x1EE39, 0x1EE39, Lo),
    R::single(0x1EE3B, 0x1EE3B, Lo),
    R::single(0x1EE42, 0x1EE42, Lo),
    R::single(0x1EE47, 0x1EE47, Lo),
    R::single(0x1EE49, 0x1EE49, Lo),
    R::single(0x1EE4B, 0x1EE4B, Lo),
    R::single(0x1EE4D, 0x1EE4F, Lo),
    R::single(0x1EE51, 0x1EE52, Lo),
    R::single(0x1EE54, 0x1EE54, Lo),
    R::single(0x1EE57, 0x1EE57, Lo),
    R::single(0x1EE59, 0x1EE59, Lo),
    R::single(0x1EE5B, 0x1EE5B, Lo),
    R::single(0x1EE5D, 0x1EE5D, Lo),
    R::single(0x1EE5F, 0x1EE5F, Lo),
    R::single(0x1EE61, 0x1EE62, Lo),
    R::single(0x1EE64, 0x1EE64, Lo),
    R::single(0x1EE67, 0x1EE6A, Lo),
    R::single(0x1EE6C, 0x1EE72, Lo),
    R::single(0x1EE74, 0x1EE77, Lo),
    R::single(0x1EE79, 0x1EE7C, Lo),
    R::single(0x1EE7E, 0x1EE7E, Lo),
    R::single(0x1EE80, 0x1EE89, Lo),
    R::single(0x1EE8B, 0x1EE9B, Lo),
    R::single(0x1EEA1, 0x1EEA3, Lo),
    R::single(0x1EEA5, 0x1EEA9, Lo),
    R::single(0x1EEAB, 0x1EEBB, Lo),
    R::single(0x1EEF0, 0x1EEF1, Sm),
    R::single(0x1F000, 0x1F02B, So),
    R::single(0x1F030, 0x1F093, So),
    R::single(0x1F0A0, 0x1F0AE, So),
    R::single(0x1F0B1, 0x1F0BF, So),
    R::single(0x1F0C1, 0x1F0CF, So),
    R::single(0x1F0D1, 0x1F0F5, So),
    R::single(0x1F100, 0x1F10C, No),
    R::single(0x1F10D, 0x1F1AD, So),
    R::single(0x1F1E6, 0x1F202, So),
    R::single(0x1F210, 0x1F23B, So),
    R::single(0x1F240, 0x1F248, So),
    R::single(0x1F250, 0x1F251, So),
    R::single(0x1F260, 0x1F265, So),
    R::single(0x1F300, 0x1F3FA, So),
    R::single(0x1F3FB, 0x1F3FF, Sk),
    R::single(0x1F400, 0x1F6D7, So),
    R::single(0x1F6DD, 0x1F6EC, So),
    R::single(0x1F6F0, 0x1F6FC, So),
    R::single(0x1F700, 0x1F773, So),
    R::single(0x1F780, 0x1F7D8, So),
    R::single(0x1F7E0, 0x1F7EB, So),
    R::single(0x1F7F0, 0x1F7F0, So),
    R::single(0x1F800, 0x1F80B, So),
    R::single(0x1F810, 0x1F847, So),
    R::single(0x1F850, 0x1F859, So),
    R::single(0x1F860, 0x1F887, So),
    R::single(0x1F890, 0x1F8AD, So),
    R::single(0x1F8B0, 0x1F8B1, So),
    R::single(0x1F900, 0x1FA53, So),
    R::single(0x1FA60, 0x1FA6D, So),
    R::single(0x1FA70, 0x1FA74, So),
    R::single(0x1FA78, 0x1FA7C, So),
    R::single(0x1FA80, 0x1FA86, So),
    R::single(0x1FA90, 0x1FAAC, So),
    R::single(0x1FAB0, 0x1FABA, So),
    R::single(0x1FAC0, 0x1FAC5, So),
    R::single(0x1FAD0, 0x1FAD9, So),
    R::single(0x1FAE0, 0x1FAE7, So),
    R::single(0x1FAF0, 0x1FAF6, So),
    R::single(0x1FB00, 0x1FB92, So),
    R::single(0x1FB94, 0x1FBCA, So),
    R::single(0x1FBF0, 0x1FBF9, Nd),
    R::single(0x20000, 0x2A6DF, Lo),
    R::single(0x2A700, 0x2B738, Lo),
    R::single(0x2B740, 0x2B81D, Lo),
    R::single(0x2B820, 0x2CEA1, Lo),
    R::single(0x2CEB0, 0x2EBE0, Lo),
    R::single(0x2F800, 0x2FA1D, Lo),
    R::single(0x30000, 0x3134A, Lo),
    R::single(0xE0001, 0xE0001, Cf),
    R::single(0xE0020, 0xE007F, Cf),
    R::single(0xE0100, 0xE01EF, Mn),
    R::single(0xF0000, 0xFFFFD, Co),
    R::single(0x100000, 0x10FFFD, Co),
];
