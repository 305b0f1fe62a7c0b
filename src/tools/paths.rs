//! URL construction for the OPS `rest-services` families.

use crate::tools::params::{ConvertParams, DocumentParams, FamilyParams};

/// Which `published-data` view to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishedView {
    Biblio,
    Abstract,
    FullCycle,
}

impl PublishedView {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishedView::Biblio => "biblio",
            PublishedView::Abstract => "abstract",
            PublishedView::FullCycle => "full-cycle",
        }
    }
}

pub fn search_url(base: &str) -> String {
    format!("{}/published-data/search", base)
}

pub fn published_data_url(base: &str, params: &DocumentParams, view: PublishedView) -> String {
    format!(
        "{}/published-data/{}/{}/{}/{}",
        base,
        params.ref_type,
        params.ref_format,
        params.number,
        view.as_str()
    )
}

pub fn family_url(base: &str, params: &FamilyParams) -> String {
    let url = format!(
        "{}/family/{}/{}/{}",
        base, params.ref_type, params.ref_format, params.number
    );
    if params.biblio {
        format!("{}/biblio", url)
    } else if params.legal {
        format!("{}/legal", url)
    } else {
        url
    }
}

pub fn legal_url(base: &str, params: &DocumentParams) -> String {
    format!(
        "{}/legal/{}/{}/{}",
        base, params.ref_type, params.ref_format, params.number
    )
}

pub fn number_service_url(base: &str, params: &ConvertParams) -> String {
    format!(
        "{}/number-service/{}/{}/{}/{}",
        base, params.ref_type, params.input_format, params.number, params.output_format
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::params::{NumberFormat, RefType};

    const BASE: &str = "https://ops.epo.org/3.2/rest-services";

    fn doc(number: &str) -> DocumentParams {
        DocumentParams {
            number: number.to_owned(),
            ref_type: RefType::default(),
            ref_format: NumberFormat::default(),
        }
    }

    fn family(biblio: bool, legal: bool) -> FamilyParams {
        FamilyParams {
            number: "EP1000000".to_owned(),
            ref_type: RefType::Application,
            ref_format: NumberFormat::Docdb,
            biblio,
            legal,
        }
    }

    #[test]
    fn published_data_views() {
        let params = doc("EP1000000");
        assert_eq!(
            published_data_url(BASE, &params, PublishedView::Biblio),
            "https://ops.epo.org/3.2/rest-services/published-data/publication/epodoc/EP1000000/biblio"
        );
        assert!(published_data_url(BASE, &params, PublishedView::FullCycle).ends_with("/EP1000000/full-cycle"));
        assert!(published_data_url(BASE, &params, PublishedView::Abstract).ends_with("/EP1000000/abstract"));
    }

    #[test]
    fn family_variants_and_precedence() {
        let plain = family_url(BASE, &family(false, false));
        assert_eq!(plain, format!("{}/family/application/docdb/EP1000000", BASE));
        assert_eq!(family_url(BASE, &family(false, true)), format!("{}/legal", plain));
        assert_eq!(family_url(BASE, &family(true, false)), format!("{}/biblio", plain));
        assert_eq!(family_url(BASE, &family(true, true)), format!("{}/biblio", plain));
    }

    #[test]
    fn legal_and_number_service() {
        assert_eq!(
            legal_url(BASE, &doc("EP1000000")),
            format!("{}/legal/publication/epodoc/EP1000000", BASE)
        );
        let convert = ConvertParams {
            number: "EP1000000".to_owned(),
            ref_type: RefType::Publication,
            input_format: NumberFormat::Epodoc,
            output_format: NumberFormat::Original,
        };
        assert_eq!(
            number_service_url(BASE, &convert),
            format!("{}/number-service/publication/epodoc/EP1000000/original", BASE)
        );
    }
}
