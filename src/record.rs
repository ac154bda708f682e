//! The in-memory `us_accidents` row.
//!
//! [`UsAccident`] stores one slot per schema column, every slot independently
//! nullable. Three access styles share that storage:
//!
//! - typed accessors (`severity()`, `set_city(..)`, `with_id(..)`), generated
//!   by the `field_accessors!` macro
//! - positional access through [`FieldId`] with [`UsAccident::value`] and
//!   [`UsAccident::set_value`]
//! - name-keyed access with [`UsAccident::set_by_name`] and
//!   [`UsAccident::field_map`]
//!
//! A slot that is present always holds the [`Value`] variant its column
//! declares; [`UsAccident::set_value`] rejects anything else, and the codecs
//! only ever write schema-shaped values. Nothing in this module knows field
//! names or kinds directly, the schema table does.

use hashbrown::HashMap;

use crate::error::{Error, Result};
use crate::schema::{FieldId, FIELD_COUNT, SCHEMA};
use crate::types::Value;

/// One row of the `us_accidents` table, all 47 fields nullable.
///
/// Equality is slot-wise on stored values, with doubles compared by bit
/// pattern, so a decoded row compares equal to the row that was encoded even
/// through NaN and negative zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsAccident {
    values: [Option<Value>; FIELD_COUNT],
}

impl UsAccident {
    /// Creates a row with every field null.
    pub fn new() -> Self {
        Self {
            values: std::array::from_fn(|_| None),
        }
    }

    /// Returns the stored value for `field`, or `None` when it is null.
    pub fn value(&self, field: FieldId) -> Option<&Value> {
        self.slot(field)
    }

    /// Stores `value` into `field`, checking it against the field's declared
    /// kind.
    ///
    /// `None` always succeeds and nulls the field. A present value whose
    /// variant does not match the schema is rejected with
    /// [`Error::TypeMismatch`] and leaves the row untouched.
    pub fn set_value(&mut self, field: FieldId, value: Option<Value>) -> Result<()> {
        if let Some(v) = &value {
            if v.kind() != field.kind() {
                return Err(Error::TypeMismatch {
                    field: field.name(),
                    expected: field.kind(),
                    found: v.kind(),
                });
            }
        }
        self.set_slot(field, value);
        Ok(())
    }

    /// Name-keyed variant of [`UsAccident::set_value`].
    ///
    /// Unknown names report [`Error::UnknownField`]; known names are checked
    /// and stored exactly as the positional form would.
    pub fn set_by_name(&mut self, name: &str, value: Option<Value>) -> Result<()> {
        let field = FieldId::from_name(name).ok_or_else(|| Error::UnknownField {
            name: name.to_string(),
        })?;
        self.set_value(field, value)
    }

    /// Name-keyed variant of [`UsAccident::value`].
    pub fn value_by_name(&self, name: &str) -> Result<Option<&Value>> {
        let field = FieldId::from_name(name).ok_or_else(|| Error::UnknownField {
            name: name.to_string(),
        })?;
        Ok(self.slot(field))
    }

    /// Snapshots the whole row as a name-to-value map, one entry per schema
    /// column, null fields included as `None`.
    pub fn field_map(&self) -> HashMap<&'static str, Option<Value>> {
        SCHEMA
            .iter()
            .map(|def| (def.name, self.slot(def.id).cloned()))
            .collect()
    }

    pub(crate) fn slot(&self, field: FieldId) -> Option<&Value> {
        self.values[field.index()].as_ref()
    }

    pub(crate) fn set_slot(&mut self, field: FieldId, value: Option<Value>) {
        self.values[field.index()] = value;
    }

    field_accessors! {
        id => Id: int,
        id_str => IdStr: text,
        source => Source: text,
        severity => Severity: int,
        start_time => StartTime: timestamp,
        end_time => EndTime: timestamp,
        start_lat => StartLat: float,
        start_lng => StartLng: float,
        end_lat => EndLat: float,
        end_lng => EndLng: float,
        distance_mi => DistanceMi: float,
        description => Description: text,
        street => Street: text,
        city => City: text,
        county => County: text,
        state => State: text,
        zipcode => Zipcode: text,
        country => Country: text,
        timezone => Timezone: text,
        airport_code => AirportCode: text,
        weather_timestamp => WeatherTimestamp: timestamp,
        temperature_f => TemperatureF: float,
        wind_chill_f => WindChillF: float,
        humidity_percent => HumidityPercent: float,
        pressure_in => PressureIn: float,
        visibility_mi => VisibilityMi: float,
        wind_direction => WindDirection: text,
        wind_speed_mph => WindSpeedMph: float,
        precipitation_in => PrecipitationIn: float,
        weather_condition => WeatherCondition: text,
        amenity => Amenity: bool,
        bump => Bump: bool,
        crossing => Crossing: bool,
        give_way => GiveWay: bool,
        junction => Junction: bool,
        no_exit => NoExit: bool,
        railway => Railway: bool,
        roundabout => Roundabout: bool,
        station => Station: bool,
        stop => Stop: bool,
        traffic_calming => TrafficCalming: bool,
        traffic_signal => TrafficSignal: bool,
        turning_loop => TurningLoop: bool,
        sunrise_sunset => SunriseSunset: text,
        civil_twilight => CivilTwilight: text,
        nautical_twilight => NauticalTwilight: text,
        astronomical_twilight => AstronomicalTwilight: text,
    }
}

impl Default for UsAccident {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;
    use crate::types::Timestamp;

    #[test]
    fn new_row_is_all_null() {
        let row = UsAccident::new();
        for def in SCHEMA.iter() {
            assert!(row.value(def.id).is_none(), "field {} not null", def.name);
        }
    }

    #[test]
    fn typed_accessors_round_trip() {
        let mut row = UsAccident::new();
        row.set_id(Some(7));
        row.set_start_lat(Some(39.86));
        row.set_amenity(Some(false));
        row.set_city(Some("Dayton".to_string()));
        row.set_start_time(Some(Timestamp::from_millis(1_454_891_828_000)));

        assert_eq!(row.id(), Some(7));
        assert_eq!(row.start_lat(), Some(39.86));
        assert_eq!(row.amenity(), Some(false));
        assert_eq!(row.city(), Some("Dayton"));
        assert_eq!(
            row.start_time(),
            Some(Timestamp::from_millis(1_454_891_828_000))
        );
        assert_eq!(row.end_time(), None);

        row.set_city(None);
        assert_eq!(row.city(), None);
    }

    #[test]
    fn builder_chain_sets_fields() {
        let row = UsAccident::new()
            .with_id(Some(1))
            .with_severity(Some(2))
            .with_city(Some("Dayton".to_string()));
        assert_eq!(row.id(), Some(1));
        assert_eq!(row.severity(), Some(2));
        assert_eq!(row.city(), Some("Dayton"));
    }

    #[test]
    fn set_value_enforces_field_kind() {
        let mut row = UsAccident::new();
        let err = row
            .set_value(FieldId::Severity, Some(Value::Text("high".into())))
            .unwrap_err();
        match err {
            Error::TypeMismatch {
                field,
                expected,
                found,
            } => {
                assert_eq!(field, "severity");
                assert_eq!(expected, FieldKind::Int);
                assert_eq!(found, FieldKind::Text);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(row.severity(), None);

        row.set_value(FieldId::Severity, Some(Value::Int(3))).unwrap();
        assert_eq!(row.severity(), Some(3));
        row.set_value(FieldId::Severity, None).unwrap();
        assert_eq!(row.severity(), None);
    }

    #[test]
    fn name_keyed_access() {
        let mut row = UsAccident::new();
        row.set_by_name("visibility_mi", Some(Value::Float(10.0)))
            .unwrap();
        assert_eq!(row.visibility_mi(), Some(10.0));
        assert_eq!(
            row.value_by_name("visibility_mi").unwrap(),
            Some(&Value::Float(10.0))
        );

        let err = row.set_by_name("visibility", None).unwrap_err();
        assert_eq!(err.to_string(), "no such field: visibility");
        assert!(row.value_by_name("visibility").is_err());
    }

    #[test]
    fn field_map_covers_every_column() {
        let row = UsAccident::new().with_state(Some("OH".to_string()));
        let map = row.field_map();
        assert_eq!(map.len(), FIELD_COUNT);
        assert_eq!(map["state"], Some(Value::Text("OH".into())));
        assert_eq!(map["severity"], None);
    }

    #[test]
    fn equality_is_slot_wise() {
        let a = UsAccident::new().with_id(Some(1)).with_bump(Some(true));
        let mut b = a.clone();
        assert_eq!(a, b);
        b.set_bump(Some(false));
        assert_ne!(a, b);
        b.set_bump(Some(true));
        assert_eq!(a, b);
    }

    #[test]
    fn clone_is_deep_for_text_fields() {
        let a = UsAccident::new().with_description(Some("I-75 ramp".to_string()));
        let mut b = a.clone();
        b.set_description(Some("cleared".to_string()));
        assert_eq!(a.description(), Some("I-75 ramp"));
        assert_eq!(b.description(), Some("cleared"));
    }
}
