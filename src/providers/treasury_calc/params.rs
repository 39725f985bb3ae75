use crate::models::query::RedemptionQuery;

/// Builds the calculator's form body for one query.
///
/// The field set is a wire contract with the calculator and must be
/// reproduced exactly: every `*List` accumulator field is present but empty,
/// and `OldRedemptionDate` carries a fixed placeholder. The form is always
/// submitted as series EE regardless of the query's series; the calculator
/// echoes the effective series back in its response.
pub fn construct_form(query: &RedemptionQuery) -> Vec<(&'static str, String)> {
    vec![
        ("RedemptionDate", query.redemption_date.to_string()),
        ("Series", "EE".to_string()),
        ("Denomination", query.denomination.clone()),
        ("SerialNumber", query.serial_number.clone()),
        ("IssueDate", query.issue_date.to_string()),
        ("btnAdd.x", "CALC".to_string()),
        ("SerialNumList", String::new()),
        ("IssueDateList", String::new()),
        ("SeriesList", String::new()),
        ("DenominationList", String::new()),
        ("IssuePriceList", String::new()),
        ("InterestList", String::new()),
        ("YTDInterestList", String::new()),
        ("ValueList", String::new()),
        ("InterestRateList", String::new()),
        ("NextAccrualDateList", String::new()),
        ("MaturityDateList", String::new()),
        ("NoteList", String::new()),
        ("OldRedemptionDate", "1.1.2007".to_string()),
        ("ViewPos", "0".to_string()),
        ("ViewType", "Partial".to_string()),
        ("Version", "6".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::month::MonthDate;

    fn sample_query(series: &str) -> RedemptionQuery {
        RedemptionQuery {
            series: series.to_string(),
            serial_number: "C123019924EE".to_string(),
            denomination: "100".to_string(),
            issue_date: MonthDate::new(1990, 7).unwrap(),
            redemption_date: MonthDate::new(2005, 12).unwrap(),
        }
    }

    fn field<'a>(form: &'a [(&'static str, String)], name: &str) -> &'a str {
        &form.iter().find(|(k, _)| *k == name).unwrap().1
    }

    #[test]
    fn test_dates_are_mm_yyyy() {
        let form = construct_form(&sample_query("EE"));
        assert_eq!(field(&form, "IssueDate"), "07/1990");
        assert_eq!(field(&form, "RedemptionDate"), "12/2005");
    }

    #[test]
    fn test_series_is_always_ee() {
        // Inherited quirk: the request queries EE even when the holding says
        // otherwise.
        let form = construct_form(&sample_query("I"));
        assert_eq!(field(&form, "Series"), "EE");
    }

    #[test]
    fn test_accumulator_fields_are_present_but_empty() {
        let form = construct_form(&sample_query("EE"));
        for name in [
            "SerialNumList",
            "IssueDateList",
            "SeriesList",
            "DenominationList",
            "IssuePriceList",
            "InterestList",
            "YTDInterestList",
            "ValueList",
            "InterestRateList",
            "NextAccrualDateList",
            "MaturityDateList",
            "NoteList",
        ] {
            assert_eq!(field(&form, name), "", "{name} should be empty");
        }
        assert_eq!(field(&form, "OldRedemptionDate"), "1.1.2007");
    }
}
