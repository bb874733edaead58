//! Feste Feldtabelle des `handling.meta`-Formats.
//!
//! Jeder Feldname ist exakt (case-sensitiv) so geschrieben, wie ihn das Spiel
//! erwartet, inklusive `fCamberStiffnesss` mit drei `s`. Die Tabelle ist
//! geschlossen: unbekannte Namen werden beim Auflösen abgelehnt.

/// Datentyp eines Feldes. Bestimmt Parsing, Schreiben und Validierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Dezimalzahl im `value`-Attribut (`<fMass value="1300.0" />`)
    Decimal,
    /// Ganzzahl im `value`-Attribut (`<nInitialDriveGears value="6" />`)
    Integer,
    /// Drei Achsen-Attribute (`<vec... x="0" y="0" z="0" />`)
    Vector,
    /// Freitext als Element-Inhalt (`<handlingName>ADDER</handlingName>`)
    Text,
    /// Opake Bitmasken-Zeichenkette als Element-Inhalt
    Flags,
}

impl FieldKind {
    /// Wert steht als Text-Inhalt im Element.
    pub fn is_text(self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::Flags)
    }
}

/// Formular-Abschnitt, in dem ein Feld angezeigt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSection {
    Basic,
    Vector,
    Drive,
    Brake,
    SteeringTraction,
    Suspension,
    RollDamage,
    Misc,
}

impl FieldSection {
    /// Alle Abschnitte in Anzeige-Reihenfolge.
    pub const ALL: [FieldSection; 8] = [
        FieldSection::Basic,
        FieldSection::Vector,
        FieldSection::Drive,
        FieldSection::Brake,
        FieldSection::SteeringTraction,
        FieldSection::Suspension,
        FieldSection::RollDamage,
        FieldSection::Misc,
    ];

    /// Überschrift des Abschnitts.
    pub fn title(self) -> &'static str {
        match self {
            FieldSection::Basic => "Basic Properties",
            FieldSection::Vector => "Vector Properties",
            FieldSection::Drive => "Drive Properties",
            FieldSection::Brake => "Brake Properties",
            FieldSection::SteeringTraction => "Steering & Traction",
            FieldSection::Suspension => "Suspension",
            FieldSection::RollDamage => "Roll & Damage",
            FieldSection::Misc => "Misc Properties",
        }
    }

    /// Felder dieses Abschnitts in Schema-Reihenfolge.
    pub fn fields(self) -> impl Iterator<Item = HandlingField> {
        HandlingField::ALL
            .iter()
            .copied()
            .filter(move |field| field.section() == self)
    }
}

/// Achse eines Vektorfeldes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Alle Achsen in Schreib-Reihenfolge.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Attributname im XML (`x`, `y`, `z`).
    pub fn attribute(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Löst einen Achsen-Schlüssel auf (case-insensitiv).
    pub fn from_key(key: &str) -> Option<Axis> {
        match key {
            "x" | "X" => Some(Axis::X),
            "y" | "Y" => Some(Axis::Y),
            "z" | "Z" => Some(Axis::Z),
            _ => None,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.attribute())
    }
}

macro_rules! handling_fields {
    ($($variant:ident => $name:literal, $kind:ident, $section:ident, $label:literal;)+) => {
        /// Geschlossene Aufzählung aller bekannten Handling-Felder.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum HandlingField {
            $($variant,)+
        }

        impl HandlingField {
            /// Alle Felder in Schema-Reihenfolge (= Schreib-Reihenfolge).
            pub const ALL: &'static [HandlingField] = &[$(HandlingField::$variant,)+];

            /// Exakter Elementname im XML.
            pub fn name(self) -> &'static str {
                match self {
                    $(HandlingField::$variant => $name,)+
                }
            }

            /// Datentyp des Feldes.
            pub fn kind(self) -> FieldKind {
                match self {
                    $(HandlingField::$variant => FieldKind::$kind,)+
                }
            }

            /// Formular-Abschnitt.
            pub fn section(self) -> FieldSection {
                match self {
                    $(HandlingField::$variant => FieldSection::$section,)+
                }
            }

            /// Beschriftung im Formular.
            pub fn label(self) -> &'static str {
                match self {
                    $(HandlingField::$variant => $label,)+
                }
            }

            /// Löst einen Elementnamen auf. Exakter Vergleich, keine Groß/Klein-Toleranz.
            pub fn from_name(name: &str) -> Option<HandlingField> {
                match name {
                    $($name => Some(HandlingField::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

handling_fields! {
    HandlingName => "handlingName", Text, Basic, "Handling Name";
    Mass => "fMass", Decimal, Basic, "Mass";
    InitialDragCoeff => "fInitialDragCoeff", Decimal, Basic, "Initial Drag Coefficient";
    PercentSubmerged => "fPercentSubmerged", Decimal, Basic, "Percent Submerged";

    CentreOfMassOffset => "vecCentreOfMassOffset", Vector, Vector, "Centre of Mass Offset";
    InertiaMultiplier => "vecInertiaMultiplier", Vector, Vector, "Inertia Multiplier";

    DriveBiasFront => "fDriveBiasFront", Decimal, Drive, "Drive Bias Front";
    InitialDriveGears => "nInitialDriveGears", Integer, Drive, "Initial Drive Gears";
    InitialDriveForce => "fInitialDriveForce", Decimal, Drive, "Initial Drive Force";
    DriveInertia => "fDriveInertia", Decimal, Drive, "Drive Inertia";
    ClutchChangeRateScaleUpShift => "fClutchChangeRateScaleUpShift", Decimal, Drive, "Clutch Change Rate Scale Up Shift";
    ClutchChangeRateScaleDownShift => "fClutchChangeRateScaleDownShift", Decimal, Drive, "Clutch Change Rate Scale Down Shift";
    InitialDriveMaxFlatVel => "fInitialDriveMaxFlatVel", Decimal, Drive, "Initial Drive Max Flat Velocity";

    BrakeForce => "fBrakeForce", Decimal, Brake, "Brake Force";
    BrakeBiasFront => "fBrakeBiasFront", Decimal, Brake, "Brake Bias Front";
    HandBrakeForce => "fHandBrakeForce", Decimal, Brake, "Hand Brake Force";

    SteeringLock => "fSteeringLock", Decimal, SteeringTraction, "Steering Lock";
    TractionCurveMax => "fTractionCurveMax", Decimal, SteeringTraction, "Traction Curve Max";
    TractionCurveMin => "fTractionCurveMin", Decimal, SteeringTraction, "Traction Curve Min";
    TractionCurveLateral => "fTractionCurveLateral", Decimal, SteeringTraction, "Traction Curve Lateral";
    TractionSpringDeltaMax => "fTractionSpringDeltaMax", Decimal, SteeringTraction, "Traction Spring Delta Max";
    LowSpeedTractionLossMult => "fLowSpeedTractionLossMult", Decimal, SteeringTraction, "Low Speed Traction Loss Mult";
    CamberStiffness => "fCamberStiffnesss", Decimal, SteeringTraction, "Camber Stiffness";
    TractionBiasFront => "fTractionBiasFront", Decimal, SteeringTraction, "Traction Bias Front";
    TractionLossMult => "fTractionLossMult", Decimal, SteeringTraction, "Traction Loss Mult";

    SuspensionForce => "fSuspensionForce", Decimal, Suspension, "Suspension Force";
    SuspensionCompDamp => "fSuspensionCompDamp", Decimal, Suspension, "Suspension Comp Damp";
    SuspensionReboundDamp => "fSuspensionReboundDamp", Decimal, Suspension, "Suspension Rebound Damp";
    SuspensionUpperLimit => "fSuspensionUpperLimit", Decimal, Suspension, "Suspension Upper Limit";
    SuspensionLowerLimit => "fSuspensionLowerLimit", Decimal, Suspension, "Suspension Lower Limit";
    SuspensionRaise => "fSuspensionRaise", Decimal, Suspension, "Suspension Raise";
    SuspensionBiasFront => "fSuspensionBiasFront", Decimal, Suspension, "Suspension Bias Front";

    AntiRollBarForce => "fAntiRollBarForce", Decimal, RollDamage, "Anti Roll Bar Force";
    AntiRollBarBiasFront => "fAntiRollBarBiasFront", Decimal, RollDamage, "Anti Roll Bar Bias Front";
    RollCentreHeightFront => "fRollCentreHeightFront", Decimal, RollDamage, "Roll Centre Height Front";
    RollCentreHeightRear => "fRollCentreHeightRear", Decimal, RollDamage, "Roll Centre Height Rear";
    CollisionDamageMult => "fCollisionDamageMult", Decimal, RollDamage, "Collision Damage Mult";
    WeaponDamageMult => "fWeaponDamageMult", Decimal, RollDamage, "Weapon Damage Mult";
    DeformationDamageMult => "fDeformationDamageMult", Decimal, RollDamage, "Deformation Damage Mult";
    EngineDamageMult => "fEngineDamageMult", Decimal, RollDamage, "Engine Damage Mult";

    PetrolTankVolume => "fPetrolTankVolume", Decimal, Misc, "Petrol Tank Volume";
    OilVolume => "fOilVolume", Decimal, Misc, "Oil Volume";
    SeatOffsetDistX => "fSeatOffsetDistX", Decimal, Misc, "Seat Offset Dist X";
    SeatOffsetDistY => "fSeatOffsetDistY", Decimal, Misc, "Seat Offset Dist Y";
    SeatOffsetDistZ => "fSeatOffsetDistZ", Decimal, Misc, "Seat Offset Dist Z";
    MonetaryValue => "nMonetaryValue", Integer, Misc, "Monetary Value";
    ModelFlags => "strModelFlags", Flags, Misc, "Model Flags";
    HandlingFlags => "strHandlingFlags", Flags, Misc, "Handling Flags";
    DamageFlags => "strDamageFlags", Flags, Misc, "Damage Flags";
    AiHandling => "AIHandling", Text, Misc, "AI Handling";
}

impl HandlingField {
    /// Das Anzeigename-Feld eines Records.
    pub const DISPLAY_NAME: HandlingField = HandlingField::HandlingName;
}

impl std::fmt::Display for HandlingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
