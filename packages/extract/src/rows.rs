//! Row classification and arity normalization for tokenized lines.
//!
//! Every page of an incident summary mixes data rows with headers, page
//! footers, and narrative notes. Data rows always start with a numeric
//! time-of-day token, so classification is a lead-token check; everything
//! else is dropped silently rather than reported as an error.

/// Number of fields in a well-formed incident row:
/// time, case number, location, nature, agency ORI.
pub const RECORD_ARITY: usize = 5;

/// Index where placeholders are inserted for under-length rows.
///
/// Points at the location column. In this report family a short row
/// almost always means the incident had no street address; time, case
/// number, nature, and ORI are comparatively reliable.
pub const MISSING_FIELD_INDEX: usize = 2;

/// Returns whether a tokenized line represents an incident data row.
///
/// A line qualifies iff it has at least one field and the first field
/// starts with an ASCII digit. Headers ("Date / Time"), footers, and
/// blank separators all fail this test.
#[must_use]
pub fn is_incident_row(fields: &[String]) -> bool {
    fields
        .first()
        .and_then(|field| field.chars().next())
        .is_some_and(|c| c.is_ascii_digit())
}

/// Pads or truncates a qualifying row to exactly [`RECORD_ARITY`] fields.
///
/// While the row is short, an empty-string placeholder is inserted at
/// [`MISSING_FIELD_INDEX`] (clamped to the current length, so a 1-field
/// row grows by appending). Rows longer than [`RECORD_ARITY`] are
/// truncated. An already-5-field row passes through unchanged.
///
/// Callers must supply at least one field; the classifier guarantees
/// this for pipeline input.
#[must_use]
pub fn normalize_fields(mut fields: Vec<String>) -> Vec<String> {
    while fields.len() < RECORD_ARITY {
        let at = MISSING_FIELD_INDEX.min(fields.len());
        fields.insert(at, String::new());
    }
    fields.truncate(RECORD_ARITY);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn time_leading_rows_qualify() {
        assert!(is_incident_row(&fields(&["14:32", "2024-00091"])));
        assert!(is_incident_row(&fields(&["9:05"])));
    }

    #[test]
    fn header_and_narrative_rows_do_not_qualify() {
        assert!(!is_incident_row(&fields(&["Incident Report Summary"])));
        assert!(!is_incident_row(&fields(&["Date / Time", "Incident Number"])));
        assert!(!is_incident_row(&fields(&[])));
    }

    #[test]
    fn empty_first_field_does_not_panic() {
        assert!(!is_incident_row(&fields(&[""])));
    }

    #[test]
    fn full_rows_pass_through_unchanged() {
        let row = fields(&["14:32", "2024-00091", "1200 N Main St", "Disturbance", "OK0140100"]);
        assert_eq!(normalize_fields(row.clone()), row);
    }

    #[test]
    fn missing_location_is_backfilled_at_index_2() {
        let row = fields(&["09:15", "2024-00012", "Theft", "OK0140100"]);
        assert_eq!(
            normalize_fields(row),
            fields(&["09:15", "2024-00012", "", "Theft", "OK0140100"])
        );
    }

    #[test]
    fn insertion_repeats_until_full_arity() {
        assert_eq!(
            normalize_fields(fields(&["09:15", "2024-00012", "OK0140100"])),
            fields(&["09:15", "2024-00012", "", "", "OK0140100"])
        );
    }

    #[test]
    fn single_field_row_grows_to_full_arity() {
        assert_eq!(
            normalize_fields(fields(&["09:15"])),
            fields(&["09:15", "", "", "", ""])
        );
    }

    #[test]
    fn overlong_rows_are_truncated() {
        assert_eq!(
            normalize_fields(fields(&["a", "b", "c", "d", "e", "f"])),
            fields(&["a", "b", "c", "d", "e"])
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_fields(fields(&["09:15", "2024-00012", "Theft", "OK0140100"]));
        assert_eq!(normalize_fields(once.clone()), once);
    }
}
