use crate::i18n::Language;

/// All localized user-facing UI strings for a language
///
/// Strings are stored in their raw, unescaped form. When rendering into
/// HTML, pass them through `render::escape_html()` first.
#[derive(Debug, Clone)]
pub struct UiStrings {
    // ==================== Branding / Hero ====================
    /// Site brand name shown in the header
    pub brand: &'static str,

    /// Short tagline shown next to the brand
    pub tagline: &'static str,

    /// Main hero heading
    pub hero_title: &'static str,

    /// Hero paragraph under the heading
    pub hero_desc: &'static str,

    /// Placeholder text for the checklist search box
    pub search_placeholder: &'static str,

    /// Heading of the quick-facts card
    pub quick_facts_title: &'static str,

    /// Label of the "jump to checklist" button
    pub start_checklist: &'static str,

    // ==================== Section Titles ====================
    /// Checklist section heading
    pub checklist_title: &'static str,

    /// Resources section heading
    pub resources_title: &'static str,

    /// FAQ section heading
    pub faq_title: &'static str,

    /// "Step" label prefixed to each checklist card number
    pub step_label: &'static str,

    /// Label of the external link on each resource card
    pub visit: &'static str,

    // ==================== Navigation ====================
    /// Nav link to the checklist section
    pub nav_checklist: &'static str,

    /// Nav link to the resources section
    pub nav_resources: &'static str,

    /// Nav link to the FAQ section
    pub nav_faq: &'static str,

    /// Nav entry that opens the consultation form
    pub nav_contact: &'static str,

    // ==================== Toolbar ====================
    /// Copy-page-link button label
    pub copy_link: &'static str,

    /// Feedback text after the page link was copied
    pub copied: &'static str,

    /// Print-checklist button label
    pub print: &'static str,

    // ==================== Footer ====================
    /// Footer privacy link label
    pub footer_privacy: &'static str,

    /// Footer disclaimer link label
    pub footer_disclaimer: &'static str,

    /// Footer feedback link label
    pub footer_feedback: &'static str,

    // ==================== Consultation Form ====================
    /// Button that opens the consultation request modal
    pub consult_open: &'static str,

    /// Modal heading
    pub consult_title: &'static str,

    /// Modal intro paragraph
    pub consult_subtitle: &'static str,

    /// Name field label/placeholder
    pub consult_name: &'static str,

    /// Age field label/placeholder
    pub consult_age: &'static str,

    /// Gender field label (also the select's empty option)
    pub consult_gender: &'static str,

    /// Gender option: male
    pub gender_male: &'static str,

    /// Gender option: female
    pub gender_female: &'static str,

    /// Gender option: other
    pub gender_other: &'static str,

    /// Phone field label/placeholder
    pub consult_phone: &'static str,

    /// Email field label/placeholder
    pub consult_email: &'static str,

    /// Submit button label
    pub consult_submit: &'static str,

    /// Cancel button label
    pub consult_cancel: &'static str,

    /// Acknowledgment shown after a successful submission
    pub consult_success: &'static str,

    /// Acknowledgment shown when the submission transport failed
    pub consult_error: &'static str,
}

impl UiStrings {
    /// Get the string table for a language.
    pub fn for_language(language: Language) -> &'static UiStrings {
        if language == Language::HINDI {
            &HINDI_STRINGS
        } else {
            &ENGLISH_STRINGS
        }
    }
}

// ==================== English Strings ====================

/// English UI strings (canonical)
pub const ENGLISH_STRINGS: UiStrings = UiStrings {
    brand: "Nayi Raah",
    tagline: "Help after a loss",
    hero_title: "Step-by-step help when a loved one passes",
    hero_desc: "A simple, step-by-step checklist with trusted resources. \
No legal jargon. No sign-up. Free.",
    search_placeholder: "Search steps e.g. EPF, nominee, property",
    quick_facts_title: "Quick facts",
    start_checklist: "Start checklist",

    checklist_title: "Step-by-step Checklist",
    resources_title: "Resources & Helplines (Haryana)",
    faq_title: "Frequently Asked Questions",
    step_label: "Step",
    visit: "Visit",

    nav_checklist: "Checklist",
    nav_resources: "Resources",
    nav_faq: "FAQ",
    nav_contact: "Consult",

    copy_link: "Copy link",
    copied: "Link copied",
    print: "Print checklist",

    footer_privacy: "Privacy",
    footer_disclaimer: "Disclaimer",
    footer_feedback: "Feedback",

    consult_open: "Request Consultation",
    consult_title: "Request a Consultation",
    consult_subtitle: "Share your details and we’ll connect you with the right \
legal help for succession, property transfer, insurance/PF claims, and more.",
    consult_name: "Full Name",
    consult_age: "Age",
    consult_gender: "Gender",
    gender_male: "Male",
    gender_female: "Female",
    gender_other: "Other",
    consult_phone: "Phone Number",
    consult_email: "Email",
    consult_submit: "Submit",
    consult_cancel: "Cancel",
    consult_success: "Thanks! We’ll reach out soon.",
    consult_error: "Submitted. If there’s an issue, please try again.",
};

// ==================== Hindi Strings ====================

/// Hindi UI strings
pub const HINDI_STRINGS: UiStrings = UiStrings {
    brand: "नई राह",
    tagline: "शोक के बाद सहायता",
    hero_title: "जब कोई अपना चला जाए — कदम-दर-कदम सहारा।",
    hero_desc: "सरल चरण-दर-चरण चेकलिस्ट और भरोसेमंद संसाधन। \
बिना कानूनी जटिल भाषा, बिना साइन-अप, निःशुल्क।",
    search_placeholder: "खोजें: EPF, नामित व्यक्ति, संपत्ति",
    quick_facts_title: "त्वरित तथ्य",
    start_checklist: "चेकलिस्ट शुरू करें",

    checklist_title: "चरण-दर-चरण चेकलिस्ट",
    resources_title: "संसाधन व हेल्पलाइन (हरियाणा)",
    faq_title: "अक्सर पूछे जाने वाले प्रश्न",
    step_label: "चरण",
    visit: "देखें",

    nav_checklist: "चेकलिस्ट",
    nav_resources: "संसाधन",
    nav_faq: "प्रश्न",
    nav_contact: "परामर्श",

    copy_link: "लिंक कॉपी करें",
    copied: "लिंक कॉपी हो गया",
    print: "चेकलिस्ट प्रिंट करें",

    footer_privacy: "गोपनीयता",
    footer_disclaimer: "अस्वीकरण",
    footer_feedback: "प्रतिक्रिया",

    consult_open: "कानूनी परामर्श का अनुरोध करें",
    consult_title: "परामर्श अनुरोध",
    consult_subtitle: "अपना विवरण साझा करें — उत्तराधिकार, संपत्ति नामांतरण, \
बीमा/पीएफ दावे आदि के लिए हम आपको सही कानूनी सहायता से जोड़ेंगे।",
    consult_name: "पूरा नाम",
    consult_age: "आयु",
    consult_gender: "लिंग",
    gender_male: "पुरुष",
    gender_female: "महिला",
    gender_other: "अन्य",
    consult_phone: "फ़ोन नंबर",
    consult_email: "ईमेल",
    consult_submit: "जमा करें",
    consult_cancel: "रद्द करें",
    consult_success: "धन्यवाद! हम शीघ्र आपसे संपर्क करेंगे।",
    consult_error: "जमा कर दिया गया। समस्या हो तो कृपया पुनः प्रयास करें।",
};
