//! Declarative schema for the `us_accidents` table.
//!
//! All 47 columns are declared once, in database order, in [`SCHEMA`]. The
//! database, binary, and text codecs each iterate that table rather than
//! hand-listing fields, so column order, semantic kinds, and SQL type codes
//! cannot drift apart between encodings.
//!
//! ## Column layout
//!
//! | positions | columns | kind |
//! |-----------|---------|------|
//! | 1 | `id` | integer |
//! | 2-3 | `id_str`, `source` | string |
//! | 4 | `severity` | integer (SMALLINT in the table) |
//! | 5-6 | `start_time`, `end_time` | timestamp |
//! | 7-11 | coordinates and `distance_mi` | double |
//! | 12-20 | location strings (`state`, `country`, `airport_code` are CHAR) |
//! | 21 | `weather_timestamp` | timestamp |
//! | 22-30 | weather readings | double, two strings |
//! | 31-43 | road-feature flags (`amenity` .. `turning_loop`) | boolean |
//! | 44-47 | day-phase strings (`sunrise_sunset` ..) | string |
//!
//! [`FieldId`] discriminants are the 0-based positions, which is what makes
//! the slot array in [`crate::record`] and the positional codecs line up
//! for free.

use std::fmt;

use phf::phf_map;

/// Number of columns in the `us_accidents` table.
pub const FIELD_COUNT: usize = 47;

/// Identifies one column of the `us_accidents` table.
///
/// Discriminants are the 0-based declared positions; every positional codec
/// relies on this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FieldId {
    Id = 0,
    IdStr,
    Source,
    Severity,
    StartTime,
    EndTime,
    StartLat,
    StartLng,
    EndLat,
    EndLng,
    DistanceMi,
    Description,
    Street,
    City,
    County,
    State,
    Zipcode,
    Country,
    Timezone,
    AirportCode,
    WeatherTimestamp,
    TemperatureF,
    WindChillF,
    HumidityPercent,
    PressureIn,
    VisibilityMi,
    WindDirection,
    WindSpeedMph,
    PrecipitationIn,
    WeatherCondition,
    Amenity,
    Bump,
    Crossing,
    GiveWay,
    Junction,
    NoExit,
    Railway,
    Roundabout,
    Station,
    Stop,
    TrafficCalming,
    TrafficSignal,
    TurningLoop,
    SunriseSunset,
    CivilTwilight,
    NauticalTwilight,
    AstronomicalTwilight,
}

impl FieldId {
    /// 0-based position in the declared column order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// 1-based column index, the form the database codec uses.
    pub fn column(self) -> usize {
        self as usize + 1
    }

    /// Canonical column name.
    pub fn name(self) -> &'static str {
        SCHEMA[self.index()].name
    }

    /// Semantic kind of the column.
    pub fn kind(self) -> FieldKind {
        SCHEMA[self.index()].kind
    }

    /// SQL type code the database codec binds with.
    pub fn sql_type(self) -> SqlType {
        SCHEMA[self.index()].sql_type
    }

    /// Looks up a field by its canonical column name.
    pub fn from_name(name: &str) -> Option<FieldId> {
        FIELDS_BY_NAME.get(name).copied()
    }

    /// Looks up a field by 0-based position.
    pub fn from_index(index: usize) -> Option<FieldId> {
        SCHEMA.get(index).map(|def| def.id)
    }
}

/// Semantic type of a column, shared by the schema table and
/// [`Value`](crate::types::Value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Int,
    Float,
    Bool,
    Text,
    Timestamp,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::Int => "integer",
            FieldKind::Float => "double",
            FieldKind::Bool => "boolean",
            FieldKind::Text => "string",
            FieldKind::Timestamp => "timestamp",
        })
    }
}

/// JDBC-compatible SQL type codes, fixed per column by the table schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum SqlType {
    /// Single-character codes: `state`, `country`, `airport_code`.
    Char = 1,
    Integer = 4,
    /// `severity` is a SMALLINT in the table; the value still rides in an
    /// `i32`.
    Smallint = 5,
    Double = 8,
    Varchar = 12,
    Timestamp = 93,
    /// The road-feature flags.
    Bit = -7,
}

impl SqlType {
    /// The raw JDBC type code.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// One column declaration: identity, canonical name, kind, SQL type code.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub id: FieldId,
    pub name: &'static str,
    pub kind: FieldKind,
    pub sql_type: SqlType,
}

macro_rules! def {
    ($id:ident, $name:literal, $kind:ident, $sql:ident) => {
        FieldDef {
            id: FieldId::$id,
            name: $name,
            kind: FieldKind::$kind,
            sql_type: SqlType::$sql,
        }
    };
}

/// The 47 columns of `us_accidents`, in database order.
pub static SCHEMA: [FieldDef; FIELD_COUNT] = [
    def!(Id, "id", Int, Integer),
    def!(IdStr, "id_str", Text, Varchar),
    def!(Source, "source", Text, Varchar),
    def!(Severity, "severity", Int, Smallint),
    def!(StartTime, "start_time", Timestamp, Timestamp),
    def!(EndTime, "end_time", Timestamp, Timestamp),
    def!(StartLat, "start_lat", Float, Double),
    def!(StartLng, "start_lng", Float, Double),
    def!(EndLat, "end_lat", Float, Double),
    def!(EndLng, "end_lng", Float, Double),
    def!(DistanceMi, "distance_mi", Float, Double),
    def!(Description, "description", Text, Varchar),
    def!(Street, "street", Text, Varchar),
    def!(City, "city", Text, Varchar),
    def!(County, "county", Text, Varchar),
    def!(State, "state", Text, Char),
    def!(Zipcode, "zipcode", Text, Varchar),
    def!(Country, "country", Text, Char),
    def!(Timezone, "timezone", Text, Varchar),
    def!(AirportCode, "airport_code", Text, Char),
    def!(WeatherTimestamp, "weather_timestamp", Timestamp, Timestamp),
    def!(TemperatureF, "temperature_f", Float, Double),
    def!(WindChillF, "wind_chill_f", Float, Double),
    def!(HumidityPercent, "humidity_percent", Float, Double),
    def!(PressureIn, "pressure_in", Float, Double),
    def!(VisibilityMi, "visibility_mi", Float, Double),
    def!(WindDirection, "wind_direction", Text, Varchar),
    def!(WindSpeedMph, "wind_speed_mph", Float, Double),
    def!(PrecipitationIn, "precipitation_in", Float, Double),
    def!(WeatherCondition, "weather_condition", Text, Varchar),
    def!(Amenity, "amenity", Bool, Bit),
    def!(Bump, "bump", Bool, Bit),
    def!(Crossing, "crossing", Bool, Bit),
    def!(GiveWay, "give_way", Bool, Bit),
    def!(Junction, "junction", Bool, Bit),
    def!(NoExit, "no_exit", Bool, Bit),
    def!(Railway, "railway", Bool, Bit),
    def!(Roundabout, "roundabout", Bool, Bit),
    def!(Station, "station", Bool, Bit),
    def!(Stop, "stop", Bool, Bit),
    def!(TrafficCalming, "traffic_calming", Bool, Bit),
    def!(TrafficSignal, "traffic_signal", Bool, Bit),
    def!(TurningLoop, "turning_loop", Bool, Bit),
    def!(SunriseSunset, "sunrise_sunset", Text, Varchar),
    def!(CivilTwilight, "civil_twilight", Text, Varchar),
    def!(NauticalTwilight, "nautical_twilight", Text, Varchar),
    def!(AstronomicalTwilight, "astronomical_twilight", Text, Varchar),
];

static FIELDS_BY_NAME: phf::Map<&'static str, FieldId> = phf_map! {
    "id" => FieldId::Id,
    "id_str" => FieldId::IdStr,
    "source" => FieldId::Source,
    "severity" => FieldId::Severity,
    "start_time" => FieldId::StartTime,
    "end_time" => FieldId::EndTime,
    "start_lat" => FieldId::StartLat,
    "start_lng" => FieldId::StartLng,
    "end_lat" => FieldId::EndLat,
    "end_lng" => FieldId::EndLng,
    "distance_mi" => FieldId::DistanceMi,
    "description" => FieldId::Description,
    "street" => FieldId::Street,
    "city" => FieldId::City,
    "county" => FieldId::County,
    "state" => FieldId::State,
    "zipcode" => FieldId::Zipcode,
    "country" => FieldId::Country,
    "timezone" => FieldId::Timezone,
    "airport_code" => FieldId::AirportCode,
    "weather_timestamp" => FieldId::WeatherTimestamp,
    "temperature_f" => FieldId::TemperatureF,
    "wind_chill_f" => FieldId::WindChillF,
    "humidity_percent" => FieldId::HumidityPercent,
    "pressure_in" => FieldId::PressureIn,
    "visibility_mi" => FieldId::VisibilityMi,
    "wind_direction" => FieldId::WindDirection,
    "wind_speed_mph" => FieldId::WindSpeedMph,
    "precipitation_in" => FieldId::PrecipitationIn,
    "weather_condition" => FieldId::WeatherCondition,
    "amenity" => FieldId::Amenity,
    "bump" => FieldId::Bump,
    "crossing" => FieldId::Crossing,
    "give_way" => FieldId::GiveWay,
    "junction" => FieldId::Junction,
    "no_exit" => FieldId::NoExit,
    "railway" => FieldId::Railway,
    "roundabout" => FieldId::Roundabout,
    "station" => FieldId::Station,
    "stop" => FieldId::Stop,
    "traffic_calming" => FieldId::TrafficCalming,
    "traffic_signal" => FieldId::TrafficSignal,
    "turning_loop" => FieldId::TurningLoop,
    "sunrise_sunset" => FieldId::SunriseSunset,
    "civil_twilight" => FieldId::CivilTwilight,
    "nautical_twilight" => FieldId::NauticalTwilight,
    "astronomical_twilight" => FieldId::AstronomicalTwilight,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_positions_match_field_ids() {
        for (index, def) in SCHEMA.iter().enumerate() {
            assert_eq!(def.id.index(), index, "misplaced field {}", def.name);
        }
    }

    #[test]
    fn name_lookup_covers_every_column() {
        for def in SCHEMA.iter() {
            assert_eq!(FieldId::from_name(def.name), Some(def.id));
        }
        assert_eq!(FieldId::from_name("no_such_column"), None);
        assert_eq!(FieldId::from_name("ID"), None);
    }

    #[test]
    fn index_lookup_is_total_within_bounds() {
        assert_eq!(FieldId::from_index(0), Some(FieldId::Id));
        assert_eq!(FieldId::from_index(46), Some(FieldId::AstronomicalTwilight));
        assert_eq!(FieldId::from_index(47), None);
    }

    #[test]
    fn known_positions_are_stable() {
        assert_eq!(FieldId::Severity.index(), 3);
        assert_eq!(FieldId::StartLat.column(), 7);
        assert_eq!(FieldId::City.column(), 14);
        assert_eq!(FieldId::State.index(), 15);
        assert_eq!(FieldId::Amenity.column(), 31);
        assert_eq!(FieldId::TurningLoop.index(), 42);
        assert_eq!(FieldId::AstronomicalTwilight.column(), FIELD_COUNT);
    }

    #[test]
    fn sql_type_codes_match_the_table() {
        assert_eq!(FieldId::Id.sql_type().code(), 4);
        assert_eq!(FieldId::Severity.sql_type().code(), 5);
        assert_eq!(FieldId::StartTime.sql_type().code(), 93);
        assert_eq!(FieldId::StartLat.sql_type().code(), 8);
        assert_eq!(FieldId::IdStr.sql_type().code(), 12);
        assert_eq!(FieldId::State.sql_type().code(), 1);
        assert_eq!(FieldId::Amenity.sql_type().code(), -7);
    }

    #[test]
    fn boolean_block_is_contiguous() {
        let flags: Vec<_> = SCHEMA
            .iter()
            .filter(|def| def.kind == FieldKind::Bool)
            .map(|def| def.id.index())
            .collect();
        assert_eq!(flags.len(), 13);
        assert_eq!(flags[0], FieldId::Amenity.index());
        assert!(flags.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(FieldKind::Int.to_string(), "integer");
        assert_eq!(FieldKind::Timestamp.to_string(), "timestamp");
    }
}
