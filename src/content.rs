//! Immutable bilingual content model.
//!
//! Everything the site displays — checklist steps, resource links, FAQ
//! entries, quick facts — lives here as `const` data with parallel English
//! and Hindi text. Nothing in this module changes at runtime; the view layer
//! only selects which language branch to show.

use crate::i18n::Language;

/// A pair of parallel text values, one per supported language.
///
/// Content is authored in English and Hindi side by side; there is no
/// fallback chain because every entry carries both branches.
#[derive(Debug, Clone, Copy)]
pub struct Localized<T> {
    /// English branch
    pub en: T,
    /// Hindi branch
    pub hi: T,
}

impl<T> Localized<T> {
    /// Select the branch for a language.
    pub fn get(&self, language: Language) -> &T {
        if language == Language::HINDI {
            &self.hi
        } else {
            &self.en
        }
    }
}

/// One checklist step: a bilingual title plus bilingual bullet points.
///
/// A step's identity is its position in [`STEPS`]; steps are never reordered
/// or mutated.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// Step title in both languages
    pub title: Localized<&'static str>,
    /// Bullet points in both languages (parallel lists)
    pub points: Localized<&'static [&'static str]>,
}

/// An external resource link with a bilingual description.
#[derive(Debug, Clone, Copy)]
pub struct Resource {
    /// Display name (kept as-is in both languages)
    pub name: &'static str,
    /// Short bilingual description
    pub desc: Localized<&'static str>,
    /// External URL
    pub link: &'static str,
}

/// One FAQ entry with a bilingual question and answer.
#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    /// Question in both languages
    pub question: Localized<&'static str>,
    /// Answer in both languages
    pub answer: Localized<&'static str>,
}

/// Number of checklist steps; fixed for the life of the site.
pub const STEP_COUNT: usize = 10;

/// The fixed, ordered checklist.
pub static STEPS: [Step; STEP_COUNT] = [
    Step {
        title: Localized {
            en: "Get the Death Certificate",
            hi: "मृत्यु प्रमाणपत्र प्राप्त करें",
        },
        points: Localized {
            en: &[
                "Apply at local municipal authority/hospital.",
                "Collect 10–15 certified copies for claims and transfers.",
                "Keep soft scans (PDF/photos) for easy submission.",
            ],
            hi: &[
                "स्थानीय नगर निगम/अस्पताल से आवेदन करें।",
                "दावों/हस्तांतरण हेतु 10–15 सत्यापित प्रतियाँ लें।",
                "आसान जमा हेतु स्कैन/फ़ोटो सुरक्षित रखें।",
            ],
        },
    },
    Step {
        title: Localized {
            en: "Inform Key Institutions",
            hi: "महत्वपूर्ण संस्थाओं को सूचित करें",
        },
        points: Localized {
            en: &[
                "Banks, employer (EPF/Gratuity/Pension), insurer.",
                "Police if sudden/unnatural death.",
            ],
            hi: &[
                "बैंक, नियोक्ता (EPF/ग्रेच्युटी/पेंशन), बीमा कंपनी।",
                "अचानक/अस्वाभाविक मृत्यु पर पुलिस को सूचित करें।",
            ],
        },
    },
    Step {
        title: Localized {
            en: "Secure Important Documents",
            hi: "महत्वपूर्ण दस्तावेज़ सुरक्षित रखें",
        },
        points: Localized {
            en: &[
                "Aadhaar, PAN, Passport, Voter ID.",
                "Bank passbooks, insurance policies, EPF details.",
                "Property papers, vehicle RCs, marriage certificate.",
            ],
            hi: &[
                "आधार, पैन, पासपोर्ट, वोटर आईडी।",
                "बैंक पासबुक, बीमा पॉलिसी, EPF विवरण।",
                "संपत्ति कागज़ात, वाहन आरसी, विवाह प्रमाणपत्र।",
            ],
        },
    },
    Step {
        title: Localized {
            en: "Access Bank Accounts & Funds",
            hi: "बैंक खातों/राशि तक पहुँच",
        },
        points: Localized {
            en: &[
                "If nominee exists: submit death certificate + your ID.",
                "If no nominee: legal heir/succession certificate may be required.",
                "Ask bank for their deceased claim forms.",
            ],
            hi: &[
                "यदि नामित व्यक्ति है: मृत्यु प्रमाणपत्र + पहचान दें।",
                "यदि नामित नहीं: कानूनी वारिस/उत्तराधिकार प्रमाणपत्र लग सकता है।",
                "बैंक से मृतक दावा फॉर्म माँगें।",
            ],
        },
    },
    Step {
        title: Localized {
            en: "Claim Insurance & PF",
            hi: "बीमा व पीएफ दावा करें",
        },
        points: Localized {
            en: &[
                "Life insurance: file claim with death certificate.",
                "EPF/Gratuity: apply via employer/EPFO with forms.",
                "Keep acknowledgement receipts.",
            ],
            hi: &[
                "जीवन बीमा: मृत्यु प्रमाणपत्र के साथ दावा करें।",
                "EPF/ग्रेच्युटी: नियोक्ता/EPFO माध्यम से फॉर्म जमा करें।",
                "प्राप्ति रसीदें सुरक्षित रखें।",
            ],
        },
    },
    Step {
        title: Localized {
            en: "Transfer Property/Assets",
            hi: "संपत्ति/संपदा का हस्तांतरण",
        },
        points: Localized {
            en: &[
                "If will exists: probate may be required (state-specific).",
                "No will: apply for succession certificate in court.",
                "Get mutation of land/house at municipal/revenue office.",
            ],
            hi: &[
                "वसीयत हो तो (राज्य अनुसार) प्रोबेट लग सकता है।",
                "वसीयत न हो तो न्यायालय से उत्तराधिकार प्रमाणपत्र लें।",
                "भूमि/मकान नामांतरण (म्यूटेशन) कराएँ।",
            ],
        },
    },
    Step {
        title: Localized {
            en: "Govt Support & Schemes",
            hi: "सरकारी सहायता व योजनाएँ",
        },
        points: Localized {
            en: &[
                "State Widow Pension (names vary by state).",
                "PM Suraksha Bima / PM Jeevan Jyoti Bima (if enrolled).",
                "Scholarships for children of deceased parents.",
            ],
            hi: &[
                "राज्य की विधवा पेंशन (राज्य अनुसार नाम अलग)।",
                "पीएम सुरक्षा बीमा / पीएम जीवन ज्योति बीमा (यदि नामांकित)।",
                "अभिभावक-विहीन बच्चों के लिए छात्रवृत्तियाँ।",
            ],
        },
    },
    Step {
        title: Localized {
            en: "Notify & Update Utilities",
            hi: "यूटिलिटीज़ अपडेट/सूचित करें",
        },
        points: Localized {
            en: &[
                "Transfer/cancel electricity, water, gas, mobile lines.",
                "Close subscriptions: DTH, streaming, gym, etc.",
                "Update address/KYC.",
            ],
            hi: &[
                "बिजली, पानी, गैस, मोबाइल लाइनों का हस्तांतरण/समापन।",
                "DTH, स्ट्रीमिंग, जिम आदि सदस्यता बंद करें।",
                "पता/KYC अपडेट करें।",
            ],
        },
    },
    Step {
        title: Localized {
            en: "Support for Children/Dependents",
            hi: "बच्चों/आश्रितों के लिए सहायता",
        },
        points: Localized {
            en: &[
                "NGO-led free/discounted education programs.",
                "Apply for state/central scholarships and fee waivers.",
                "Seek grief counselling (some NGOs offer free).",
            ],
            hi: &[
                "NGO द्वारा संचालित निःशुल्क/रियायती शिक्षा कार्यक्रम।",
                "राज्य/केंद्र छात्रवृत्ति व फीस छूट के लिए आवेदन करें।",
                "शोक परामर्श लें (कई NGO निःशुल्क देते हैं)।",
            ],
        },
    },
    Step {
        title: Localized {
            en: "Get Legal Help (if stuck)",
            hi: "कानूनी मदद लें (यदि अटकें)",
        },
        points: Localized {
            en: &[
                "District Legal Services Authority (DLSA) — free legal aid.",
                "Local bar association lawyers for succession/property.",
                "Use verified NGOs; avoid paying middlemen.",
            ],
            hi: &[
                "जिला विधिक सेवा प्राधिकरण (DLSA) — निःशुल्क विधिक सहायता।",
                "उत्तराधिकार/संपत्ति हेतु स्थानीय वकीलों से सलाह लें।",
                "सत्यापित NGO ही चुनें; बिचौलियों से बचें।",
            ],
        },
    },
];

/// Resource directory (Haryana-focused, plus the all-India EPFO portal).
pub static RESOURCES: [Resource; 5] = [
    Resource {
        name: "Antyodaya Saral Haryana",
        desc: Localized {
            en: "Single-window portal for state services (certificates, pensions, etc.)",
            hi: "राज्य सेवाओं (प्रमाणपत्र, पेंशन आदि) हेतु एकल-पोर्टल",
        },
        link: "https://saralharyana.gov.in/",
    },
    Resource {
        name: "Social Justice & Empowerment Dept (Haryana)",
        desc: Localized {
            en: "Widow/destitute pensions and social welfare schemes",
            hi: "विधवा/निर्धन पेंशन व सामाजिक कल्याण योजनाएँ",
        },
        link: "https://socialjusticehry.gov.in/",
    },
    Resource {
        name: "Women & Child Development (Haryana)",
        desc: Localized {
            en: "Support schemes for women and children",
            hi: "महिला व बाल कल्याण हेतु योजनाएँ",
        },
        link: "https://wcdhry.gov.in/",
    },
    Resource {
        name: "Haryana State Legal Services Authority (HSLSA)",
        desc: Localized {
            en: "Free legal aid via DLSA in every district",
            hi: "हर ज़िले में DLSA के माध्यम से निःशुल्क विधिक सहायता",
        },
        link: "https://hslsa.gov.in/",
    },
    Resource {
        name: "EPFO – Death Claims (All-India)",
        desc: Localized {
            en: "How to file EPF/EDLI/Gratuity death claims",
            hi: "EPF/EDLI/ग्रेच्युटी मृत्यु दावे कैसे करें",
        },
        link: "https://www.epfindia.gov.in/",
    },
];

/// Frequently asked questions.
pub static FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: Localized {
            en: "Nominee vs legal heir — who actually gets the money?",
            hi: "नामित व्यक्ति बनाम कानूनी वारिस — वास्तविक अधिकार किसका?",
        },
        answer: Localized {
            en: "A nominee is a caretaker to receive funds; distribution ultimately \
follows succession laws or a valid will.",
            hi: "नामित व्यक्ति धन प्राप्त करने का अभिकर्ता होता है; अंतिम अधिकार \
उत्तराधिकार कानून या वैध वसीयत से तय होते हैं।",
        },
    },
    FaqEntry {
        question: Localized {
            en: "No nominee in bank account — what now?",
            hi: "बैंक खाते में नामित व्यक्ति नहीं है — अब क्या करें?",
        },
        answer: Localized {
            en: "Ask the bank for their deceased claim process. You may need a legal \
heir or succession certificate.",
            hi: "बैंक की मृतक दावे की प्रक्रिया पूछें। कानूनी वारिस/उत्तराधिकार \
प्रमाणपत्र की आवश्यकता पड़ सकती है।",
        },
    },
    FaqEntry {
        question: Localized {
            en: "How many copies of the death certificate should I keep?",
            hi: "मृत्यु प्रमाणपत्र की कितनी प्रतियाँ रखें?",
        },
        answer: Localized {
            en: "Keep 10–15 certified copies; many institutions still ask for a \
physical copy.",
            hi: "10–15 सत्यापित प्रतियाँ रखें; अनेक संस्थाएँ अभी भी भौतिक प्रति \
मांगती हैं।",
        },
    },
    FaqEntry {
        question: Localized {
            en: "Where can I get free legal aid?",
            hi: "निःशुल्क कानूनी सहायता कहाँ मिलेगी?",
        },
        answer: Localized {
            en: "DLSA (through HSLSA in Haryana) provides free legal assistance in \
every district.",
            hi: "हरियाणा में HSLSA के माध्यम से DLSA प्रत्येक ज़िले में निःशुल्क \
विधिक सहायता प्रदान करता है।",
        },
    },
];

/// Quick facts shown in the hero card.
pub static QUICK_FACTS: [Localized<&'static str>; 4] = [
    Localized {
        en: "Keep 10–15 copies of the death certificate.",
        hi: "मृत्यु प्रमाणपत्र की 10–15 प्रतियाँ रखें।",
    },
    Localized {
        en: "Nominee receives funds first; final rights follow succession law.",
        hi: "नामित व्यक्ति को राशि मिलती है; अंतिम अधिकार उत्तराधिकार कानून से तय होते हैं।",
    },
    Localized {
        en: "DLSA provides free legal aid in every district.",
        hi: "हर ज़िले में DLSA द्वारा निःशुल्क विधिक सहायता उपलब्ध है।",
    },
    Localized {
        en: "Avoid middlemen; use official claim forms only.",
        hi: "बिचौलियों से बचें; केवल आधिकारिक फॉर्म का उपयोग करें।",
    },
];
