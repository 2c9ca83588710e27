pub(crate) const VALIDATE_NS: &str = "http://energynavigator.com/xml/afe/validate/2";
pub(crate) const AFE_NS: &str = "http://energynavigator.com/xml/afe/2";
pub(crate) const RESULT_NS: &str = "http://energynavigator.com/xml/afe/validate-result/2";

pub(crate) const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
