use embassy_models::{locale::Locale, news::NewsItem};

/// Text in the display locales of the website. Missing translations fall
/// back to English.
#[derive(Debug, Clone, Copy)]
struct Text {
    en: &'static str,
    ar: Option<&'static str>,
}

impl Text {
    const fn new(en: &'static str, ar: &'static str) -> Self {
        Self { en, ar: Some(ar) }
    }

    fn get(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Ar => self.ar.unwrap_or(self.en),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CatalogEntry {
    slug: &'static str,
    day: &'static str,
    month: Text,
    title: Text,
    excerpt: Text,
}

impl CatalogEntry {
    fn localize(&self, locale: Locale) -> NewsItem {
        NewsItem {
            slug: self.slug.into(),
            day: self.day.into(),
            month: self.month.get(locale).into(),
            title: self.title.get(locale).into(),
            excerpt: self.excerpt.get(locale).into(),
        }
    }
}

/// Projects the news catalog into the given display locale, newest first.
pub fn localize_catalog(locale: Locale) -> Vec<NewsItem> {
    localize(CATALOG, locale)
}

fn localize(entries: &[CatalogEntry], locale: Locale) -> Vec<NewsItem> {
    entries.iter().map(|entry| entry.localize(locale)).collect()
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        slug: "minister-commerce-meeting",
        day: "15",
        month: Text::new("JAN", "يناير"),
        title: Text::new(
            "Ambassador Issa meets with Federal Minister of Commerce",
            "لقاء السفير عيسى مع وزير التجارة الفيدرالي",
        ),
        excerpt: Text::new(
            "H.E. Mr. Abdulaziz Issa discussed bilateral trade priorities and practical steps to \
             improve private-sector cooperation between Lebanon and Pakistan.",
            "بحث سعادة السفير عبدالعزيز عيسى أولويات التعاون التجاري والخطوات العملية لتعزيز \
             الشراكات الاقتصادية بين لبنان وباكستان.",
        ),
    },
    CatalogEntry {
        slug: "independence-day-reception",
        day: "08",
        month: Text::new("DEC", "ديسمبر"),
        title: Text::new(
            "Embassy celebrates Lebanese Independence Day",
            "السفارة تحتفل بعيد الاستقلال اللبناني",
        ),
        excerpt: Text::new(
            "The Embassy hosted a reception with diplomatic representatives, government \
             officials, and members of the Lebanese community in Pakistan.",
            "استضافت السفارة حفل استقبال بحضور ممثلين دبلوماسيين ومسؤولين حكوميين وأبناء الجالية \
             اللبنانية في باكستان.",
        ),
    },
    CatalogEntry {
        slug: "consular-hours-update",
        day: "27",
        month: Text::new("NOV", "نوفمبر"),
        title: Text::new(
            "Consular section announces updated public hours",
            "القسم القنصلي يعلن تحديث ساعات استقبال المراجعين",
        ),
        excerpt: Text::new(
            "The Embassy published updated walk-in timings to improve service flow for \
             passport, attestation, and civil status requests.",
            "نشرت السفارة أوقات مراجعة جديدة لتحسين تدفق الخدمات القنصلية المتعلقة بالجوازات \
             والتصديقات ومعاملات الأحوال الشخصية.",
        ),
    },
    CatalogEntry {
        slug: "student-cultural-exchange",
        day: "12",
        month: Text::new("OCT", "أكتوبر"),
        title: Text::new(
            "Student cultural exchange forum held in Islamabad",
            "منتدى للتبادل الثقافي الطلابي في إسلام آباد",
        ),
        excerpt: Text::new(
            "Lebanese and Pakistani students joined a dialogue on higher education \
             collaboration, culture, and language exchange initiatives.",
            "شارك طلاب لبنانيون وباكستانيون في حوار حول التعاون الأكاديمي والثقافي ومبادرات تبادل \
             اللغة.",
        ),
    },
    CatalogEntry {
        slug: "trade-dialogue-chambers",
        day: "21",
        month: Text::new("SEP", "سبتمبر"),
        title: Text::new(
            "Embassy joins business chambers for trade dialogue",
            "السفارة تشارك في حوار تجاري مع غرف الأعمال",
        ),
        excerpt: Text::new(
            "The mission participated in a policy roundtable on market access, logistics, and \
             opportunities for bilateral commercial partnerships.",
            "شاركت البعثة في مائدة مستديرة حول الوصول إلى الأسواق والخدمات اللوجستية وفرص \
             الشراكات التجارية الثنائية.",
        ),
    },
    CatalogEntry {
        slug: "humanitarian-coordination-briefing",
        day: "09",
        month: Text::new("AUG", "أغسطس"),
        title: Text::new(
            "Humanitarian coordination briefing with partner agencies",
            "إحاطة حول تنسيق الجهود الإنسانية مع الجهات الشريكة",
        ),
        excerpt: Text::new(
            "Officials exchanged updates on relief coordination channels and mechanisms to \
             support affected communities when needed.",
            "تبادل المسؤولون تحديثات بشأن قنوات التنسيق الإغاثي وآليات دعم المجتمعات المتضررة \
             عند الحاجة.",
        ),
    },
    CatalogEntry {
        slug: "visa-advisory-summer",
        day: "03",
        month: Text::new("JUL", "يوليو"),
        title: Text::new(
            "Embassy issues summer visa advisory",
            "السفارة تصدر تنبيهًا صيفيًا بخصوص التأشيرات",
        ),
        excerpt: Text::new(
            "Applicants were advised to submit complete files early due to seasonal demand and \
             to verify document requirements before applying.",
            "تمت دعوة المتقدمين لتقديم الملفات مكتملة مبكرًا بسبب الضغط الموسمي والتأكد من \
             المتطلبات قبل التقديم.",
        ),
    },
    CatalogEntry {
        slug: "diaspora-community-dialogue",
        day: "18",
        month: Text::new("JUN", "يونيو"),
        title: Text::new(
            "Community dialogue held with Lebanese diaspora representatives",
            "جلسة حوار مع ممثلي الجالية اللبنانية",
        ),
        excerpt: Text::new(
            "The Embassy held a consultation session covering consular priorities, education \
             support, and improved communication channels.",
            "عقدت السفارة جلسة تشاورية تناولت أولويات الخدمات القنصلية ودعم التعليم وتطوير قنوات \
             التواصل.",
        ),
    },
];
