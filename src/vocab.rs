//! Enumerated vocabularies: closed token sets used by attribute fields.
//!
//! Every vocabulary reserves an `Unknown` member for tokens outside the
//! set. Mapping to `Unknown` is never a parse failure by itself; each
//! variant's `validate` decides whether `Unknown` is acceptable in context.
//! The string-to-member mapping lives here and nowhere else, so extending a
//! vocabulary is a one-place change.

/// A closed token set with an `Unknown` sentinel for unmapped input.
pub trait Vocabulary: Copy + Eq + Sized {
    /// Field label used in error messages, e.g. `"board side"`.
    const FIELD: &'static str;

    /// Map a raw token; anything outside the set becomes `Unknown`.
    fn from_token(token: &str) -> Self;

    /// The canonical token for this member (empty for `Unknown`).
    fn token(self) -> &'static str;

    fn is_unknown(self) -> bool;
}

/// Component mounting technology (`.CMnt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mounting {
    ThroughHole,
    SurfaceMount,
    Pressfit,
    Other,
    Unknown,
}

impl Vocabulary for Mounting {
    const FIELD: &'static str = "mounting type";

    fn from_token(token: &str) -> Self {
        match token {
            "TH" => Mounting::ThroughHole,
            "SMD" => Mounting::SurfaceMount,
            "Pressfit" => Mounting::Pressfit,
            "Other" => Mounting::Other,
            _ => Mounting::Unknown,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Mounting::ThroughHole => "TH",
            Mounting::SurfaceMount => "SMD",
            Mounting::Pressfit => "Pressfit",
            Mounting::Other => "Other",
            Mounting::Unknown => "",
        }
    }

    fn is_unknown(self) -> bool {
        self == Mounting::Unknown
    }
}

/// What the file represents within a production set (`.Part`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Single,
    Array,
    FabricationPanel,
    Coupon,
    Other,
    Unknown,
}

impl Vocabulary for PartKind {
    const FIELD: &'static str = "file part";

    fn from_token(token: &str) -> Self {
        match token {
            "Single" => PartKind::Single,
            "Array" => PartKind::Array,
            "FabricationPanel" => PartKind::FabricationPanel,
            "Coupon" => PartKind::Coupon,
            "Other" => PartKind::Other,
            _ => PartKind::Unknown,
        }
    }

    fn token(self) -> &'static str {
        match self {
            PartKind::Single => "Single",
            PartKind::Array => "Array",
            PartKind::FabricationPanel => "FabricationPanel",
            PartKind::Coupon => "Coupon",
            PartKind::Other => "Other",
            PartKind::Unknown => "",
        }
    }

    fn is_unknown(self) -> bool {
        self == PartKind::Unknown
    }
}

/// Image polarity of the file (`.FilePolarity`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolarityKind {
    Positive,
    Negative,
    Unknown,
}

impl Vocabulary for PolarityKind {
    const FIELD: &'static str = "file polarity";

    fn from_token(token: &str) -> Self {
        match token {
            "Positive" => PolarityKind::Positive,
            "Negative" => PolarityKind::Negative,
            _ => PolarityKind::Unknown,
        }
    }

    fn token(self) -> &'static str {
        match self {
            PolarityKind::Positive => "Positive",
            PolarityKind::Negative => "Negative",
            PolarityKind::Unknown => "",
        }
    }

    fn is_unknown(self) -> bool {
        self == PolarityKind::Unknown
    }
}

/// How flashed text is drawn (`.FlashText` second field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRepresentation {
    /// `B`: the text is rendered as a barcode.
    Barcode,
    /// `C`: the text is rendered as characters.
    Characters,
    Unknown,
}

impl Vocabulary for TextRepresentation {
    const FIELD: &'static str = "text representation";

    fn from_token(token: &str) -> Self {
        match token {
            "B" => TextRepresentation::Barcode,
            "C" => TextRepresentation::Characters,
            _ => TextRepresentation::Unknown,
        }
    }

    fn token(self) -> &'static str {
        match self {
            TextRepresentation::Barcode => "B",
            TextRepresentation::Characters => "C",
            TextRepresentation::Unknown => "",
        }
    }

    fn is_unknown(self) -> bool {
        self == TextRepresentation::Unknown
    }
}

/// Mirroring of flashed text (`.FlashText` third field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorFlag {
    /// `R`: readable, not mirrored.
    NotMirrored,
    /// `M`: mirrored.
    Mirrored,
    Unknown,
}

impl Vocabulary for MirrorFlag {
    const FIELD: &'static str = "mirror flag";

    fn from_token(token: &str) -> Self {
        match token {
            "R" => MirrorFlag::NotMirrored,
            "M" => MirrorFlag::Mirrored,
            _ => MirrorFlag::Unknown,
        }
    }

    fn token(self) -> &'static str {
        match self {
            MirrorFlag::NotMirrored => "R",
            MirrorFlag::Mirrored => "M",
            MirrorFlag::Unknown => "",
        }
    }

    fn is_unknown(self) -> bool {
        self == MirrorFlag::Unknown
    }
}

/// Board side a layer applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    /// `Inr`: an inner copper layer.
    Inner,
    Bottom,
    /// Both sides; also the default for a v-cut record that omits the side.
    Both,
    Unknown,
}

impl Vocabulary for Side {
    const FIELD: &'static str = "board side";

    fn from_token(token: &str) -> Self {
        match token {
            "Top" => Side::Top,
            "Inr" => Side::Inner,
            "Bot" => Side::Bottom,
            "Both" => Side::Both,
            _ => Side::Unknown,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Side::Top => "Top",
            Side::Inner => "Inr",
            Side::Bottom => "Bot",
            Side::Both => "Both",
            Side::Unknown => "",
        }
    }

    fn is_unknown(self) -> bool {
        self == Side::Unknown
    }
}

/// Usage of a copper layer (`.FileFunction,Copper` optional fourth field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopperType {
    Plane,
    Signal,
    Mixed,
    Hatched,
    Unknown,
}

impl Vocabulary for CopperType {
    const FIELD: &'static str = "copper type";

    fn from_token(token: &str) -> Self {
        match token {
            "Plane" => CopperType::Plane,
            "Signal" => CopperType::Signal,
            "Mixed" => CopperType::Mixed,
            "Hatched" => CopperType::Hatched,
            _ => CopperType::Unknown,
        }
    }

    fn token(self) -> &'static str {
        match self {
            CopperType::Plane => "Plane",
            CopperType::Signal => "Signal",
            CopperType::Mixed => "Mixed",
            CopperType::Hatched => "Hatched",
            CopperType::Unknown => "",
        }
    }

    fn is_unknown(self) -> bool {
        self == CopperType::Unknown
    }
}

/// Kind of holes in a drill/rout file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleType {
    /// `PTH`: plated through-holes.
    PlatedThrough,
    /// `NPTH`: non-plated through-holes.
    NonPlatedThrough,
    Blind,
    Buried,
    Unknown,
}

impl Vocabulary for HoleType {
    const FIELD: &'static str = "hole type";

    fn from_token(token: &str) -> Self {
        match token {
            "PTH" => HoleType::PlatedThrough,
            "NPTH" => HoleType::NonPlatedThrough,
            "Blind" => HoleType::Blind,
            "Buried" => HoleType::Buried,
            _ => HoleType::Unknown,
        }
    }

    fn token(self) -> &'static str {
        match self {
            HoleType::PlatedThrough => "PTH",
            HoleType::NonPlatedThrough => "NPTH",
            HoleType::Blind => "Blind",
            HoleType::Buried => "Buried",
            HoleType::Unknown => "",
        }
    }

    fn is_unknown(self) -> bool {
        self == HoleType::Unknown
    }
}

/// How the holes of a drill/rout file are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FabricationMethod {
    Drill,
    Rout,
    Mixed,
    Unknown,
}

impl Vocabulary for FabricationMethod {
    const FIELD: &'static str = "fabrication method";

    fn from_token(token: &str) -> Self {
        match token {
            "Drill" => FabricationMethod::Drill,
            "Rout" => FabricationMethod::Rout,
            "Mixed" => FabricationMethod::Mixed,
            _ => FabricationMethod::Unknown,
        }
    }

    fn token(self) -> &'static str {
        match self {
            FabricationMethod::Drill => "Drill",
            FabricationMethod::Rout => "Rout",
            FabricationMethod::Mixed => "Mixed",
            FabricationMethod::Unknown => "",
        }
    }

    fn is_unknown(self) -> bool {
        self == FabricationMethod::Unknown
    }
}

/// Edge plating of the board profile (`.FileFunction,Profile` second field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeTreatment {
    /// `P`: the edge is plated.
    Plated,
    /// `NP`: the edge is not plated.
    NonPlated,
    Unknown,
}

impl Vocabulary for EdgeTreatment {
    const FIELD: &'static str = "edge treatment";

    fn from_token(token: &str) -> Self {
        match token {
            "P" => EdgeTreatment::Plated,
            "NP" => EdgeTreatment::NonPlated,
            _ => EdgeTreatment::Unknown,
        }
    }

    fn token(self) -> &'static str {
        match self {
            EdgeTreatment::Plated => "P",
            EdgeTreatment::NonPlated => "NP",
            EdgeTreatment::Unknown => "",
        }
    }

    fn is_unknown(self) -> bool {
        self == EdgeTreatment::Unknown
    }
}

/// The mask material a mask-family function file describes. Mapped from the
/// function discriminator itself (`Soldermask`, `Goldmask`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskType {
    Solder,
    Carbon,
    Gold,
    Heatsink,
    Peelable,
    Silver,
    Tin,
    Unknown,
}

impl Vocabulary for MaskType {
    const FIELD: &'static str = "mask type";

    fn from_token(token: &str) -> Self {
        match token {
            "Soldermask" => MaskType::Solder,
            "Carbonmask" => MaskType::Carbon,
            "Goldmask" => MaskType::Gold,
            "Heatsinkmask" => MaskType::Heatsink,
            "Peelablemask" => MaskType::Peelable,
            "Silvermask" => MaskType::Silver,
            "Tinmask" => MaskType::Tin,
            _ => MaskType::Unknown,
        }
    }

    fn token(self) -> &'static str {
        match self {
            MaskType::Solder => "Soldermask",
            MaskType::Carbon => "Carbonmask",
            MaskType::Gold => "Goldmask",
            MaskType::Heatsink => "Heatsinkmask",
            MaskType::Peelable => "Peelablemask",
            MaskType::Silver => "Silvermask",
            MaskType::Tin => "Tinmask",
            MaskType::Unknown => "",
        }
    }

    fn is_unknown(self) -> bool {
        self == MaskType::Unknown
    }
}

/// The `.FileFunction` discriminator: selects which sub-schema governs the
/// remaining values. An `Unknown` discriminator always fails validation;
/// there is no valid unknown top-level function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionTag {
    Copper,
    Plated,
    NonPlated,
    Profile,
    Component,
    Legend,
    Soldermask,
    Carbonmask,
    Goldmask,
    Heatsinkmask,
    Peelablemask,
    Silvermask,
    Tinmask,
    Paste,
    Glue,
    Depthrout,
    Vcut,
    Viafill,
    Pads,
    Other,
    Drillmap,
    FabricationDrawing,
    ArrayDrawing,
    AssemblyDrawing,
    OtherDrawing,
    Vcutmap,
    Unknown,
}

impl FunctionTag {
    /// True for the legend/mask family that shares the 2-3 value schema
    /// (side plus an optional layer index).
    pub fn is_mask_family(self) -> bool {
        matches!(
            self,
            FunctionTag::Legend
                | FunctionTag::Soldermask
                | FunctionTag::Carbonmask
                | FunctionTag::Goldmask
                | FunctionTag::Heatsinkmask
                | FunctionTag::Peelablemask
                | FunctionTag::Silvermask
                | FunctionTag::Tinmask
        )
    }
}

impl Vocabulary for FunctionTag {
    const FIELD: &'static str = "file function";

    fn from_token(token: &str) -> Self {
        match token {
            "Copper" => FunctionTag::Copper,
            "Plated" => FunctionTag::Plated,
            "NonPlated" => FunctionTag::NonPlated,
            "Profile" => FunctionTag::Profile,
            "Component" => FunctionTag::Component,
            "Legend" => FunctionTag::Legend,
            "Soldermask" => FunctionTag::Soldermask,
            "Carbonmask" => FunctionTag::Carbonmask,
            "Goldmask" => FunctionTag::Goldmask,
            "Heatsinkmask" => FunctionTag::Heatsinkmask,
            "Peelablemask" => FunctionTag::Peelablemask,
            "Silvermask" => FunctionTag::Silvermask,
            "Tinmask" => FunctionTag::Tinmask,
            "Paste" => FunctionTag::Paste,
            "Glue" => FunctionTag::Glue,
            "Depthrout" => FunctionTag::Depthrout,
            "Vcut" => FunctionTag::Vcut,
            "Viafill" => FunctionTag::Viafill,
            "Pads" => FunctionTag::Pads,
            "Other" => FunctionTag::Other,
            "Drillmap" => FunctionTag::Drillmap,
            "FabricationDrawing" => FunctionTag::FabricationDrawing,
            "ArrayDrawing" => FunctionTag::ArrayDrawing,
            "AssemblyDrawing" => FunctionTag::AssemblyDrawing,
            "OtherDrawing" => FunctionTag::OtherDrawing,
            "Vcutmap" => FunctionTag::Vcutmap,
            _ => FunctionTag::Unknown,
        }
    }

    fn token(self) -> &'static str {
        match self {
            FunctionTag::Copper => "Copper",
            FunctionTag::Plated => "Plated",
            FunctionTag::NonPlated => "NonPlated",
            FunctionTag::Profile => "Profile",
            FunctionTag::Component => "Component",
            FunctionTag::Legend => "Legend",
            FunctionTag::Soldermask => "Soldermask",
            FunctionTag::Carbonmask => "Carbonmask",
            FunctionTag::Goldmask => "Goldmask",
            FunctionTag::Heatsinkmask => "Heatsinkmask",
            FunctionTag::Peelablemask => "Peelablemask",
            FunctionTag::Silvermask => "Silvermask",
            FunctionTag::Tinmask => "Tinmask",
            FunctionTag::Paste => "Paste",
            FunctionTag::Glue => "Glue",
            FunctionTag::Depthrout => "Depthrout",
            FunctionTag::Vcut => "Vcut",
            FunctionTag::Viafill => "Viafill",
            FunctionTag::Pads => "Pads",
            FunctionTag::Other => "Other",
            FunctionTag::Drillmap => "Drillmap",
            FunctionTag::FabricationDrawing => "FabricationDrawing",
            FunctionTag::ArrayDrawing => "ArrayDrawing",
            FunctionTag::AssemblyDrawing => "AssemblyDrawing",
            FunctionTag::OtherDrawing => "OtherDrawing",
            FunctionTag::Vcutmap => "Vcutmap",
            FunctionTag::Unknown => "",
        }
    }

    fn is_unknown(self) -> bool {
        self == FunctionTag::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_tokens_become_unknown() {
        assert_eq!(Mounting::from_token("BGA"), Mounting::Unknown);
        assert_eq!(Side::from_token("Left"), Side::Unknown);
        assert_eq!(FunctionTag::from_token("Bogus"), FunctionTag::Unknown);
        assert_eq!(MirrorFlag::from_token("Q"), MirrorFlag::Unknown);
    }

    #[test]
    fn mapping_is_case_sensitive() {
        assert_eq!(Mounting::from_token("smd"), Mounting::Unknown);
        assert_eq!(Side::from_token("TOP"), Side::Unknown);
    }

    #[test]
    fn tokens_round_trip() {
        for side in [Side::Top, Side::Inner, Side::Bottom, Side::Both] {
            assert_eq!(Side::from_token(side.token()), side);
        }
        for ht in [
            HoleType::PlatedThrough,
            HoleType::NonPlatedThrough,
            HoleType::Blind,
            HoleType::Buried,
        ] {
            assert_eq!(HoleType::from_token(ht.token()), ht);
        }
    }

    #[test]
    fn mask_family_covers_legend_and_masks_only() {
        assert!(FunctionTag::Legend.is_mask_family());
        assert!(FunctionTag::Soldermask.is_mask_family());
        assert!(FunctionTag::Tinmask.is_mask_family());
        assert!(!FunctionTag::Copper.is_mask_family());
        assert!(!FunctionTag::Vcut.is_mask_family());
    }
}
