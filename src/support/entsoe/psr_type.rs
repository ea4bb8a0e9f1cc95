/// An ENTSO-E production type (`psrType`) and the source id it maps to.
///
/// Subtypes such as lignite and hard coal keep distinct ids (`uhli_hnede`,
/// `uhli_cerne`); merging them is left to
/// [`Grouping`](crate::models::mix::Grouping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PsrType {
    Biomass,
    FossilBrownCoal,
    FossilCoalDerivedGas,
    FossilGas,
    FossilHardCoal,
    FossilOil,
    HydroRunOfRiver,
    HydroWaterReservoir,
    Nuclear,
    OtherRenewable,
    Solar,
    Waste,
    WindOnshore,
}

impl PsrType {
    /// Every production type reported for the Czech grid, in code order.
    pub const ALL: [Self; 13] = [
        Self::Biomass,
        Self::FossilBrownCoal,
        Self::FossilCoalDerivedGas,
        Self::FossilGas,
        Self::FossilHardCoal,
        Self::FossilOil,
        Self::HydroRunOfRiver,
        Self::HydroWaterReservoir,
        Self::Nuclear,
        Self::OtherRenewable,
        Self::Solar,
        Self::Waste,
        Self::WindOnshore,
    ];

    /// Looks up a production type by its ENTSO-E code, e.g. `"B14"`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|psr_type| psr_type.code() == code)
    }

    /// The ENTSO-E code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Biomass => "B01",
            Self::FossilBrownCoal => "B02",
            Self::FossilCoalDerivedGas => "B03",
            Self::FossilGas => "B04",
            Self::FossilHardCoal => "B05",
            Self::FossilOil => "B06",
            Self::HydroRunOfRiver => "B11",
            Self::HydroWaterReservoir => "B12",
            Self::Nuclear => "B14",
            Self::OtherRenewable => "B15",
            Self::Solar => "B16",
            Self::Waste => "B17",
            Self::WindOnshore => "B19",
        }
    }

    /// The source id used in production snapshots and glyph tables.
    #[must_use]
    pub fn source(self) -> &'static str {
        match self {
            Self::Biomass => "biomasa",
            Self::FossilBrownCoal => "uhli_hnede",
            Self::FossilCoalDerivedGas => "uhli_plyn",
            Self::FossilGas => "plyn",
            Self::FossilHardCoal => "uhli_cerne",
            Self::FossilOil => "ropa",
            Self::HydroRunOfRiver => "voda",
            Self::HydroWaterReservoir => "voda_rezervoar",
            Self::Nuclear => "jadro",
            Self::OtherRenewable => "ostatni_oze",
            Self::Solar => "slunce",
            Self::Waste => "odpad",
            Self::WindOnshore => "vitr",
        }
    }
}
