//! Regular 6x8 glyph table
//!
//! Columns are listed left to right, bit 0 is the top pixel. Column 0 is
//! left blank as inter-character spacing. ASCII sits at its own codes; the
//! Cyrillic alphabet sits at the UTF-8 continuation bytes that follow the
//! `0xD0`/`0xD1` lead bytes (`0x90..=0xAF` А-Я, `0xB0..=0xBF` а-п,
//! `0x80..=0x8F` р-я).

use super::GlyphTable;

pub(super) const REGULAR: GlyphTable = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x00
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x01
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x02
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x03
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x04
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x05
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x06
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x07
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x08
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x09
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0A
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0B
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0C
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0D
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0F
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x10
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x11
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x12
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x13
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x14
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x15
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x16
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x17
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x18
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x19
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1A
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1B
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1C
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1D
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1F
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x20 space
    [0x00, 0x00, 0x00, 0x5F, 0x00, 0x00], // 0x21 !
    [0x00, 0x00, 0x07, 0x00, 0x07, 0x00], // 0x22 "
    [0x00, 0x14, 0x7F, 0x14, 0x7F, 0x14], // 0x23 #
    [0x00, 0x24, 0x2A, 0x7F, 0x2A, 0x12], // 0x24 $
    [0x00, 0x23, 0x13, 0x08, 0x64, 0x62], // 0x25 %
    [0x00, 0x36, 0x49, 0x55, 0x22, 0x50], // 0x26 &
    [0x00, 0x00, 0x05, 0x03, 0x00, 0x00], // 0x27 '
    [0x00, 0x00, 0x1C, 0x22, 0x41, 0x00], // 0x28 (
    [0x00, 0x00, 0x41, 0x22, 0x1C, 0x00], // 0x29 )
    [0x00, 0x14, 0x08, 0x3E, 0x08, 0x14], // 0x2A *
    [0x00, 0x08, 0x08, 0x3E, 0x08, 0x08], // 0x2B +
    [0x00, 0x00, 0x50, 0x30, 0x00, 0x00], // 0x2C ,
    [0x00, 0x08, 0x08, 0x08, 0x08, 0x08], // 0x2D -
    [0x00, 0x00, 0x60, 0x60, 0x00, 0x00], // 0x2E .
    [0x00, 0x20, 0x10, 0x08, 0x04, 0x02], // 0x2F /
    [0x00, 0x3E, 0x51, 0x49, 0x45, 0x3E], // 0x30 0
    [0x00, 0x00, 0x42, 0x7F, 0x40, 0x00], // 0x31 1
    [0x00, 0x42, 0x61, 0x51, 0x49, 0x46], // 0x32 2
    [0x00, 0x21, 0x41, 0x45, 0x4B, 0x31], // 0x33 3
    [0x00, 0x18, 0x14, 0x12, 0x7F, 0x10], // 0x34 4
    [0x00, 0x27, 0x45, 0x45, 0x45, 0x39], // 0x35 5
    [0x00, 0x3C, 0x4A, 0x49, 0x49, 0x30], // 0x36 6
    [0x00, 0x01, 0x71, 0x09, 0x05, 0x03], // 0x37 7
    [0x00, 0x36, 0x49, 0x49, 0x49, 0x36], // 0x38 8
    [0x00, 0x06, 0x49, 0x49, 0x29, 0x1E], // 0x39 9
    [0x00, 0x00, 0x36, 0x36, 0x00, 0x00], // 0x3A :
    [0x00, 0x00, 0x56, 0x36, 0x00, 0x00], // 0x3B ;
    [0x00, 0x08, 0x14, 0x22, 0x41, 0x00], // 0x3C <
    [0x00, 0x14, 0x14, 0x14, 0x14, 0x14], // 0x3D =
    [0x00, 0x00, 0x41, 0x22, 0x14, 0x08], // 0x3E >
    [0x00, 0x02, 0x01, 0x51, 0x09, 0x06], // 0x3F ?
    [0x00, 0x32, 0x49, 0x79, 0x41, 0x3E], // 0x40 @
    [0x00, 0x7E, 0x11, 0x11, 0x11, 0x7E], // 0x41 A
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x36], // 0x42 B
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x22], // 0x43 C
    [0x00, 0x7F, 0x41, 0x41, 0x22, 0x1C], // 0x44 D
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x41], // 0x45 E
    [0x00, 0x7F, 0x09, 0x09, 0x09, 0x01], // 0x46 F
    [0x00, 0x3E, 0x41, 0x49, 0x49, 0x7A], // 0x47 G
    [0x00, 0x7F, 0x08, 0x08, 0x08, 0x7F], // 0x48 H
    [0x00, 0x00, 0x41, 0x7F, 0x41, 0x00], // 0x49 I
    [0x00, 0x20, 0x40, 0x41, 0x3F, 0x01], // 0x4A J
    [0x00, 0x7F, 0x08, 0x14, 0x22, 0x41], // 0x4B K
    [0x00, 0x7F, 0x40, 0x40, 0x40, 0x40], // 0x4C L
    [0x00, 0x7F, 0x02, 0x0C, 0x02, 0x7F], // 0x4D M
    [0x00, 0x7F, 0x04, 0x08, 0x10, 0x7F], // 0x4E N
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x3E], // 0x4F O
    [0x00, 0x7F, 0x09, 0x09, 0x09, 0x06], // 0x50 P
    [0x00, 0x3E, 0x41, 0x51, 0x21, 0x5E], // 0x51 Q
    [0x00, 0x7F, 0x09, 0x19, 0x29, 0x46], // 0x52 R
    [0x00, 0x46, 0x49, 0x49, 0x49, 0x31], // 0x53 S
    [0x00, 0x01, 0x01, 0x7F, 0x01, 0x01], // 0x54 T
    [0x00, 0x3F, 0x40, 0x40, 0x40, 0x3F], // 0x55 U
    [0x00, 0x1F, 0x20, 0x40, 0x20, 0x1F], // 0x56 V
    [0x00, 0x3F, 0x40, 0x38, 0x40, 0x3F], // 0x57 W
    [0x00, 0x63, 0x14, 0x08, 0x14, 0x63], // 0x58 X
    [0x00, 0x07, 0x08, 0x70, 0x08, 0x07], // 0x59 Y
    [0x00, 0x61, 0x51, 0x49, 0x45, 0x43], // 0x5A Z
    [0x00, 0x00, 0x7F, 0x41, 0x41, 0x00], // 0x5B [
    [0x00, 0x02, 0x04, 0x08, 0x10, 0x20], // 0x5C backslash
    [0x00, 0x00, 0x41, 0x41, 0x7F, 0x00], // 0x5D ]
    [0x00, 0x04, 0x02, 0x01, 0x02, 0x04], // 0x5E ^
    [0x00, 0x40, 0x40, 0x40, 0x40, 0x40], // 0x5F _
    [0x00, 0x00, 0x01, 0x02, 0x04, 0x00], // 0x60 `
    [0x00, 0x20, 0x54, 0x54, 0x54, 0x78], // 0x61 a
    [0x00, 0x7F, 0x48, 0x44, 0x44, 0x38], // 0x62 b
    [0x00, 0x38, 0x44, 0x44, 0x44, 0x20], // 0x63 c
    [0x00, 0x38, 0x44, 0x44, 0x48, 0x7F], // 0x64 d
    [0x00, 0x38, 0x54, 0x54, 0x54, 0x18], // 0x65 e
    [0x00, 0x08, 0x7E, 0x09, 0x01, 0x02], // 0x66 f
    [0x00, 0x0C, 0x52, 0x52, 0x52, 0x3E], // 0x67 g
    [0x00, 0x7F, 0x08, 0x04, 0x04, 0x78], // 0x68 h
    [0x00, 0x00, 0x44, 0x7D, 0x40, 0x00], // 0x69 i
    [0x00, 0x20, 0x40, 0x44, 0x3D, 0x00], // 0x6A j
    [0x00, 0x7F, 0x10, 0x28, 0x44, 0x00], // 0x6B k
    [0x00, 0x00, 0x41, 0x7F, 0x40, 0x00], // 0x6C l
    [0x00, 0x7C, 0x04, 0x18, 0x04, 0x78], // 0x6D m
    [0x00, 0x7C, 0x08, 0x04, 0x04, 0x78], // 0x6E n
    [0x00, 0x38, 0x44, 0x44, 0x44, 0x38], // 0x6F o
    [0x00, 0x7C, 0x14, 0x14, 0x14, 0x08], // 0x70 p
    [0x00, 0x08, 0x14, 0x14, 0x18, 0x7C], // 0x71 q
    [0x00, 0x7C, 0x08, 0x04, 0x04, 0x08], // 0x72 r
    [0x00, 0x48, 0x54, 0x54, 0x54, 0x20], // 0x73 s
    [0x00, 0x04, 0x3F, 0x44, 0x40, 0x20], // 0x74 t
    [0x00, 0x3C, 0x40, 0x40, 0x20, 0x7C], // 0x75 u
    [0x00, 0x1C, 0x20, 0x40, 0x20, 0x1C], // 0x76 v
    [0x00, 0x3C, 0x40, 0x30, 0x40, 0x3C], // 0x77 w
    [0x00, 0x44, 0x28, 0x10, 0x28, 0x44], // 0x78 x
    [0x00, 0x0C, 0x50, 0x50, 0x50, 0x3C], // 0x79 y
    [0x00, 0x44, 0x64, 0x54, 0x4C, 0x44], // 0x7A z
    [0x00, 0x00, 0x08, 0x36, 0x41, 0x00], // 0x7B {
    [0x00, 0x00, 0x00, 0x7F, 0x00, 0x00], // 0x7C |
    [0x00, 0x00, 0x41, 0x36, 0x08, 0x00], // 0x7D }
    [0x00, 0x10, 0x08, 0x08, 0x10, 0x08], // 0x7E ~
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x7F
    [0x00, 0x7C, 0x14, 0x14, 0x14, 0x08], // 0x80 р
    [0x00, 0x38, 0x44, 0x44, 0x44, 0x20], // 0x81 с
    [0x00, 0x04, 0x04, 0x7C, 0x04, 0x04], // 0x82 т
    [0x00, 0x0C, 0x50, 0x50, 0x50, 0x3C], // 0x83 у
    [0x00, 0x18, 0x24, 0x7E, 0x24, 0x18], // 0x84 ф
    [0x00, 0x44, 0x28, 0x10, 0x28, 0x44], // 0x85 х
    [0x00, 0x3C, 0x20, 0x20, 0x3C, 0x60], // 0x86 ц
    [0x00, 0x0C, 0x10, 0x10, 0x10, 0x7C], // 0x87 ч
    [0x00, 0x7C, 0x40, 0x7C, 0x40, 0x7C], // 0x88 ш
    [0x00, 0x3C, 0x20, 0x3C, 0x20, 0x7C], // 0x89 щ
    [0x00, 0x04, 0x7C, 0x50, 0x50, 0x20], // 0x8A ъ
    [0x00, 0x7C, 0x50, 0x20, 0x00, 0x7C], // 0x8B ы
    [0x00, 0x7C, 0x50, 0x50, 0x50, 0x20], // 0x8C ь
    [0x00, 0x28, 0x44, 0x54, 0x54, 0x38], // 0x8D э
    [0x00, 0x7C, 0x10, 0x38, 0x44, 0x38], // 0x8E ю
    [0x00, 0x48, 0x34, 0x14, 0x14, 0x7C], // 0x8F я
    [0x00, 0x7E, 0x11, 0x11, 0x11, 0x7E], // 0x90 А
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x31], // 0x91 Б
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x36], // 0x92 В
    [0x00, 0x7F, 0x01, 0x01, 0x01, 0x01], // 0x93 Г
    [0x00, 0x60, 0x3E, 0x21, 0x3F, 0x60], // 0x94 Д
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x41], // 0x95 Е
    [0x00, 0x77, 0x08, 0x7F, 0x08, 0x77], // 0x96 Ж
    [0x00, 0x22, 0x41, 0x49, 0x49, 0x36], // 0x97 З
    [0x00, 0x7F, 0x20, 0x10, 0x08, 0x7F], // 0x98 И
    [0x00, 0x7C, 0x21, 0x12, 0x09, 0x7C], // 0x99 Й
    [0x00, 0x7F, 0x08, 0x14, 0x22, 0x41], // 0x9A К
    [0x00, 0x40, 0x3E, 0x01, 0x01, 0x7F], // 0x9B Л
    [0x00, 0x7F, 0x02, 0x0C, 0x02, 0x7F], // 0x9C М
    [0x00, 0x7F, 0x08, 0x08, 0x08, 0x7F], // 0x9D Н
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x3E], // 0x9E О
    [0x00, 0x7F, 0x01, 0x01, 0x01, 0x7F], // 0x9F П
    [0x00, 0x7F, 0x09, 0x09, 0x09, 0x06], // 0xA0 Р
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x22], // 0xA1 С
    [0x00, 0x01, 0x01, 0x7F, 0x01, 0x01], // 0xA2 Т
    [0x00, 0x27, 0x48, 0x48, 0x48, 0x3F], // 0xA3 У
    [0x00, 0x0E, 0x11, 0x7F, 0x11, 0x0E], // 0xA4 Ф
    [0x00, 0x63, 0x14, 0x08, 0x14, 0x63], // 0xA5 Х
    [0x00, 0x3F, 0x20, 0x20, 0x3F, 0x60], // 0xA6 Ц
    [0x00, 0x07, 0x08, 0x08, 0x08, 0x7F], // 0xA7 Ч
    [0x00, 0x7F, 0x40, 0x7F, 0x40, 0x7F], // 0xA8 Ш
    [0x00, 0x3F, 0x20, 0x3F, 0x20, 0x7F], // 0xA9 Щ
    [0x00, 0x01, 0x7F, 0x48, 0x48, 0x30], // 0xAA Ъ
    [0x00, 0x7F, 0x48, 0x30, 0x00, 0x7F], // 0xAB Ы
    [0x00, 0x7F, 0x48, 0x48, 0x48, 0x30], // 0xAC Ь
    [0x00, 0x22, 0x41, 0x49, 0x49, 0x3E], // 0xAD Э
    [0x00, 0x7F, 0x08, 0x3E, 0x41, 0x3E], // 0xAE Ю
    [0x00, 0x46, 0x29, 0x19, 0x09, 0x7F], // 0xAF Я
    [0x00, 0x20, 0x54, 0x54, 0x54, 0x78], // 0xB0 а
    [0x00, 0x3C, 0x4A, 0x4A, 0x49, 0x31], // 0xB1 б
    [0x00, 0x7C, 0x54, 0x54, 0x54, 0x28], // 0xB2 в
    [0x00, 0x7C, 0x04, 0x04, 0x04, 0x04], // 0xB3 г
    [0x00, 0x60, 0x38, 0x24, 0x3C, 0x60], // 0xB4 д
    [0x00, 0x38, 0x54, 0x54, 0x54, 0x18], // 0xB5 е
    [0x00, 0x6C, 0x10, 0x7C, 0x10, 0x6C], // 0xB6 ж
    [0x00, 0x28, 0x44, 0x54, 0x54, 0x28], // 0xB7 з
    [0x00, 0x7C, 0x20, 0x10, 0x08, 0x7C], // 0xB8 и
    [0x00, 0x78, 0x22, 0x14, 0x0A, 0x78], // 0xB9 й
    [0x00, 0x7C, 0x10, 0x28, 0x44, 0x00], // 0xBA к
    [0x00, 0x40, 0x38, 0x04, 0x04, 0x7C], // 0xBB л
    [0x00, 0x7C, 0x08, 0x10, 0x08, 0x7C], // 0xBC м
    [0x00, 0x7C, 0x10, 0x10, 0x10, 0x7C], // 0xBD н
    [0x00, 0x38, 0x44, 0x44, 0x44, 0x38], // 0xBE о
    [0x00, 0x7C, 0x04, 0x04, 0x04, 0x7C], // 0xBF п
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xC0
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xC1
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xC2
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xC3
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xC4
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xC5
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xC6
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xC7
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xC8
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xC9
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xCA
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xCB
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xCC
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xCD
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xCE
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xCF
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xD0
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xD1
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xD2
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xD3
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xD4
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xD5
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xD6
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xD7
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xD8
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xD9
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xDA
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xDB
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xDC
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xDD
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xDE
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xDF
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xE0
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xE1
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xE2
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xE3
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xE4
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xE5
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xE6
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xE7
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xE8
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xE9
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xEA
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xEB
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xEC
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xED
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xEE
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xEF
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xF0
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xF1
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xF2
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xF3
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xF4
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xF5
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xF6
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xF7
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xF8
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xF9
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xFA
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xFB
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xFC
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xFD
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xFE
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xFF
];
