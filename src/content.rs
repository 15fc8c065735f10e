use crate::locale::Locale;

pub const OPEN_FOR_WORK: bool = true;
pub const PROFILE_IMAGE: &str = "/profilepic.jpeg";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/dan-epstein";
pub const GITHUB_URL: &str = "https://github.com/Depsteino/depsteino.github.io";

#[derive(Debug, PartialEq)]
pub struct TimelineEntry {
    pub timeframe: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub image: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct TranslationBundle {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub portrait_label_prefix: &'static str,
    pub subtitle: &'static str,
    pub hero_bio: &'static str,
    pub scroll_label: &'static str,
    pub experience_title: &'static str,
    pub timeline: &'static [TimelineEntry],
}

impl TranslationBundle {
    pub fn for_locale(locale: Locale) -> &'static Self {
        match locale {
            Locale::En => &EN,
            Locale::He => &HE,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn figure_label(&self) -> String {
        format!("{} {}", self.portrait_label_prefix, self.full_name())
    }

    /// Falls back to the first entry, then the English first entry, then a placeholder.
    pub fn entry_or_fallback(&self, index: usize) -> &'static TimelineEntry {
        self.timeline
            .get(index)
            .or_else(|| self.timeline.first())
            .unwrap_or_else(fallback_entry)
    }
}

#[derive(Debug, PartialEq)]
pub struct Certificate {
    pub name: &'static str,
    pub issuer: &'static str,
    pub logo: &'static str,
    pub credential: Option<&'static str>,
}

pub fn fallback_entry() -> &'static TimelineEntry {
    EN.timeline.first().unwrap_or(&PLACEHOLDER_ENTRY)
}

static PLACEHOLDER_ENTRY: TimelineEntry = TimelineEntry {
    timeframe: "",
    title: "",
    summary: "",
    details: "",
    image: PROFILE_IMAGE,
    accent: "rgba(56, 189, 248, 0.55)",
};

pub static CERTIFICATES: [Certificate; 3] = [
    Certificate {
        name: "AWS Certified Solutions Architect – Professional",
        issuer: "Amazon Web Services",
        logo: "/logos/aws-sa-pro.svg",
        credential: Some("Credential ID: AWS-0000"),
    },
    Certificate {
        name: "AWS Certified DevOps Engineer – Professional",
        issuer: "Amazon Web Services",
        logo: "/logos/aws-devops-pro.svg",
        credential: Some("Credential ID: AWS-1111"),
    },
    Certificate {
        name: "HashiCorp Terraform Associate",
        issuer: "HashiCorp",
        logo: "/logos/terraform-associate.svg",
        credential: Some("Credential ID: TF-2222"),
    },
];

static EN: TranslationBundle = TranslationBundle {
    first_name: "Dan",
    last_name: "Epstein",
    portrait_label_prefix: "Portrait of",
    subtitle: "DevOps · Platform Engineer",
    hero_bio: "I’ve spent years building and automating platforms that teams can depend on. I care about clean systems, clear processes, and helping developers move faster without the noise.",
    scroll_label: "Scroll down to career journey",
    experience_title: "Career Journey · passion for Technology",
    timeline: &[
        TimelineEntry {
            timeframe: "2023 — Present",
            title: "Senior DevOps Engineer · Keep Learning!",
            summary: "What started as a curiosity for improving systems turned into a passion for automation and platform engineering.",
            details: "Today I lead initiatives around automation strategy, multi-cloud infrastructure, and platform reliability. I stay hands-on with Terraform, Kubernetes, and observability tooling to deliver robust systems that empower developers and keep production secure, efficient, and always improving.",
            image: "/image3.png",
            accent: "rgba(56, 189, 248, 0.55)",
        },
        TimelineEntry {
            timeframe: "2020 — 2023",
            title: "DevOps & Platform Focus · This is fun!",
            summary: "Scaled developer platforms and delivery pipelines across rapid-growth teams.",
            details: "I doubled down on CI/CD practices, infrastructure as code, and automated guardrails. From building scalable pipelines to integrating security and compliance into every deployment, the goal was clear: help teams ship faster with confidence.",
            image: "/image2.png",
            accent: "rgba(168, 85, 247, 0.55)",
        },
        TimelineEntry {
            timeframe: "2018 — 2020",
            title: "Early DevOps Journey · So it begins!",
            summary: "Kept customer-critical services resilient while exploring automation from the ground up.",
            details: "Curiosity met opportunity as I wrote my first Bash and Python scripts to remove toil, learned the fundamentals of clean infrastructure, and discovered how observability and steady processes keep teams moving.",
            image: "/image.png",
            accent: "rgba(2, 13, 6, 0.45)",
        },
    ],
};

static HE: TranslationBundle = TranslationBundle {
    first_name: "דן",
    last_name: "אפשטיין",
    portrait_label_prefix: "תמונה של",
    subtitle: "מהנדס DevOps · מהנדס פלטפורמות",
    hero_bio: "במשך שנים אני בונה ומאוטומט פלטפורמות שעליהן צוותים יכולים לסמוך. מערכות נקיות, תהליכים ברורים והאצה של צוותי פיתוח ללא רעשי רקע הם העיקר עבורי.",
    scroll_label: "גלול למסע הקריירה",
    experience_title: "מסע הקריירה · תשוקה לטכנולוגיה",
    timeline: &[
        TimelineEntry {
            timeframe: "2023 — כיום",
            title: "מהנדס DevOps בכיר · תמיד לומד!",
            summary: "מה שהתחיל כסקרנות לשיפור מערכות הפך לתשוקה לאוטומציה ולהנדסת פלטפורמות.",
            details: "היום אני מוביל יוזמות של אסטרטגיית אוטומציה, תשתיות מולטי-קלאוד ואמינות פלטפורמות. אני נשאר מעורב בעבודה עם Terraform, Kubernetes וכלי תצפית כדי לספק מערכות יציבות, להעצים מפתחים ולשמור על הפרודקשן בטוח ויעיל.",
            image: "/image3.png",
            accent: "rgba(56, 189, 248, 0.55)",
        },
        TimelineEntry {
            timeframe: "2020 — 2023",
            title: "פוקוס על DevOps ופלטפורמות · זה ממש כיף!",
            summary: "הרחבתי פלטפורמות פיתוח וצנרות פריסה עבור צוותים בצמיחה מהירה.",
            details: "העמקתי ב-CI/CD, תשתית כקוד ומנגנוני בקרה אוטומטיים. בניתי צנרות סקיילבּליות, שילבתי אבטחה ורגולציה בכל פריסה ודאגתי שהצוותים יוכלו לשחרר מהר ובביטחון.",
            image: "/image2.png",
            accent: "rgba(168, 85, 247, 0.55)",
        },
        TimelineEntry {
            timeframe: "2018 — 2020",
            title: "תחילת הדרך ב-DevOps · כל יום משהו חדש",
            summary: "שמרתי על שירותים קריטיים ללקוחות תוך חקר עולם האוטומציה מהיסוד.",
            details: "הסקרנות הובילה אותי לכתוב סקריפטים ראשונים ב-Bash וב-Python, להסיר עבודת כפיים וללמוד את יסודות התשתיות הנקיות, התצפיתיות והיעילות — ומשם נולדה התשוקה ארוכת הטווח ל-DevOps.",
            image: "/image.png",
            accent: "rgba(2, 13, 6, 0.45)",
        },
    ],
};
