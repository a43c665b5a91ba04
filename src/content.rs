// ABOUTME: Slide content for the aqilha-deck application
// ABOUTME: The thirteen literal slide definitions and the deck builder

use crate::model::{Alignment, Deck, Frame, ShapeRole, TextShape};
use crate::palette::Palette;
use log::{debug, info};

/// Literal definition of one text box
#[derive(Debug, Clone, Copy)]
pub struct TextSpec {
    pub text: &'static str,
    pub frame: Frame,
    pub font_size: u32,
    pub alignment: Option<Alignment>,
}

impl TextSpec {
    const fn new(text: &'static str, frame: Frame, font_size: u32) -> Self {
        Self {
            text,
            frame,
            font_size,
            alignment: None,
        }
    }

    const fn centered(mut self) -> Self {
        self.alignment = Some(Alignment::Center);
        self
    }
}

/// Literal definition of one slide: a title and its body columns
#[derive(Debug, Clone, Copy)]
pub struct SlideSpec {
    pub title: TextSpec,
    pub bodies: &'static [TextSpec],
}

const TITLE_FRAME: Frame = Frame::inches(0.5, 0.3, 9.0, 0.8);
const BODY_FRAME: Frame = Frame::inches(1.0, 1.5, 8.0, 5.0);

const fn title(text: &'static str, font_size: u32) -> TextSpec {
    TextSpec::new(text, TITLE_FRAME, font_size)
}

const fn body(text: &'static str, font_size: u32) -> TextSpec {
    TextSpec::new(text, BODY_FRAME, font_size)
}

const TEAM_MEMBERS: &str = "أعضاء الفريق

| 4 | 5 | 6 | 4 |
| اسم العضو | اسم العضو | اسم العضو | اسم العضو |";

const PROBLEM: &str = "المشكلة:

• ازدحام مروري مزمن في المدن الرئيسية
• نقص المعلومات الفورية عن حالة الطرق
• عدم وجود تنبؤات ذكية بالازدحام
• صعوبة اتخاذ قرارات سريعة
• التأثير السلبي على الوقت والوقود";

const SOLUTION: &str = "الحل:

عَقِلْها - نظام ذكي شامل

• استخدام التكنولوجيا الحديثة
• الاستجابة لاحتياجات العملاء
• الاستفادة من الاتجاهات
• التوقيت الذكي";

const DATA_SOURCES: &str = "مصادر البيانات:

1. Google Maps Platform (40%)
   - Google Traffic Layer
   - Google Directions API
   - Google Places API

2. OpenWeatherMap API (30%)
   - بيانات الطقس الحالية
   - تنبؤات لمدة 16 يوم

3. قاعدة البيانات المحلية (20%)
   - بيانات تاريخية
   - سجلات التنبيهات

4. بيانات المستخدمين (10%)
   - مواقع مجهولة الهوية
   - تفضيلات المسارات";

const TECHNOLOGIES: &str = "Frontend:
• Next.js 14 - React Framework
• Tailwind CSS - التصميم
• Google Maps JavaScript API
• TypeScript

Backend:
• Next.js API Routes
• Prisma ORM
• MySQL Database
• React Query

APIs:
• Google Maps Platform
• OpenWeatherMap API
• Google Routes API";

const IDEA: &str = "عنوان: عَقِلْها - نظام تحليل الازدحام المروري الذكي

الفوائد:
• توفير الوقت والوقود
• تحسين السلامة
• التنبؤ الذكي
• واجهة سهلة الاستخدام

الابتكارات:
• تكامل كامل مع Google Maps
• نظام تحذيرات شامل (12 نوع)
• تحليل الطقس لمدة 16 يوم
• مسارات بديلة محسّنة";

const DATA_USAGE: &str = "كيفية الحصول على البيانات:
• Google Maps API - مفتاح API من Google Cloud
• OpenWeatherMap API - التسجيل والحصول على Key
• قاعدة البيانات المحلية - استخدام Prisma ORM
• بيانات المستخدمين - جمع مجهول الهوية

كيفية استخدام البيانات:
• التحليل الفوري - عرض حالة الازدحام
• التنبؤ الذكي - تحليل الأنماط
• التنبيهات - تحليل المخاطر
• التحسين المستمر - تحسين الخوارزميات";

const IDEA_ALIGNMENT: &str = "1. تحسين الأداء:
   • تقليل وقت السفر بنسبة 40%
   • توفير الوقود والطاقة

2. تعزيز السلامة:
   • تنبيهات عن الحوادث
   • تحذيرات الطقس
   • تحليل الرؤية السيئة

3. تحسين تفاعل المستخدمين:
   • واجهة سهلة الاستخدام
   • تنبيهات مخصصة
   • معلومات واضحة

4. الابتكار التكنولوجي:
   • استخدام الذكاء الاصطناعي
   • تكامل مع APIs حديثة";

const SUMMARY: &str = "الأهداف:
• حل مشكلة الازدحام المروري
• توفير الوقت والوقود
• تحسين السلامة على الطرق

المخرجات:
• نظام ويب متكامل
• واجهة سهلة الاستخدام
• نظام تنبيهات ذكي
• تحليل فوري للازدحام

النتائج:
• تكامل كامل مع Google Maps
• نظام تحذيرات شامل
• تحليل الطقس المتقدم
• مسارات بديلة محسّنة";

const VERIFICATION: &str = "ما تم إنجازه:

✅ نظام الخرائط:
   • تكامل مع Google Maps Traffic Layer
   • عرض حالة الازدحام في الوقت الفعلي

✅ نظام التنبيهات:
   • 12 نوع تحذير مختلف
   • تنبيهات فورية

✅ تحليل الطقس:
   • تحليل شامل لمدة 16 يوم
   • تحديد الطرق الآمنة

✅ التنبؤات:
   • تنبؤات لمدة 60 دقيقة
   • تحليل الأنماط التاريخية";

const DEMO: &str = "اللقطات والشرائح التوضيحية:

1. شاشة الخريطة الرئيسية
   • عرض الخريطة مع حالة الازدحام
   • الألوان المعبرة

2. شاشة التنبيهات
   • قائمة التنبيهات النشطة
   • تفاصيل كل تنبيه

3. شاشة تحليل الطقس
   • عرض الطرق الآمنة وغير الآمنة
   • تحذيرات الطقس

4. شاشة المسارات
   • حساب المسار الأسرع
   • عرض المسافة والوقت

ملاحظة: تم إنجاز أكثر من 30% من المشروع";

const CHALLENGES: &str = "التحديات:
• تكامل مع APIs متعددة
• معالجة البيانات الكبيرة
• ضمان سرعة الاستجابة

ما تحتاج المساعدة فيه:
• مفاتيح API إضافية
• خوادم أقوى
• إرشاد من الخبراء

العمل المستقبلي (70%):
• تحسين دقة التنبؤات
• إضافة دعم لمدن إضافية
• تحسين سرعة الاستجابة
• إطلاق النسخة النهائية";

const TIMELINE: &str = "الشهر الأول:
• الأسبوع 1-2: التخطيط والتصميم
• الأسبوع 3-4: التطوير الأساسي

الشهر الثاني:
• الأسبوع 1-2: التكامل مع APIs
• الأسبوع 3-4: نظام التنبيهات

الشهر الثالث:
• الأسبوع 1-2: تحليل الطقس
• الأسبوع 3-4: التحسينات والاختبار

الشهر الرابع:
• الأسبوع 1-2: التحسينات النهائية
• الأسبوع 3-4: الإطلاق والتحسينات

الحالة الحالية: ✅ أكثر من 30% مكتمل";

const CLOSING_SUBTITLE: &str = "عَقِلْها
نظام تحليل الازدحام المروري الذكي";

/// Number of slides in the deck
pub const SLIDE_COUNT: usize = 13;

pub const SLIDES: [SlideSpec; SLIDE_COUNT] = [
    SlideSpec {
        title: TextSpec::new(
            "أبـشـر طويق - قالب تحكيم المشاريع",
            Frame::inches(0.5, 0.5, 9.0, 1.0),
            32,
        ),
        bodies: &[TextSpec::new(
            TEAM_MEMBERS,
            Frame::inches(1.0, 2.0, 8.0, 4.0),
            18,
        )],
    },
    SlideSpec {
        title: title("المشكلة وحلّها", 36),
        bodies: &[
            TextSpec::new(PROBLEM, Frame::inches(0.5, 1.5, 4.5, 5.0), 16),
            TextSpec::new(SOLUTION, Frame::inches(5.0, 1.5, 4.5, 5.0), 16),
        ],
    },
    SlideSpec {
        title: title("البيانات المستخدمة", 36),
        bodies: &[body(DATA_SOURCES, 16)],
    },
    SlideSpec {
        title: title("التقنيات المستخدمة", 36),
        bodies: &[body(TECHNOLOGIES, 16)],
    },
    SlideSpec {
        title: title("وصف الفكرة", 36),
        bodies: &[body(IDEA, 16)],
    },
    SlideSpec {
        title: title("كيفية توفير هذه البيانات وكيفية استخدامها", 28),
        bodies: &[body(DATA_USAGE, 14)],
    },
    SlideSpec {
        title: title("مواءمة الفكرة", 36),
        bodies: &[body(IDEA_ALIGNMENT, 16)],
    },
    SlideSpec {
        title: title("ملخص", 36),
        bodies: &[body(SUMMARY, 16)],
    },
    SlideSpec {
        title: title("الاختبار/التحقق", 36),
        bodies: &[body(VERIFICATION, 16)],
    },
    SlideSpec {
        title: title("العرض التوضيحي", 36),
        bodies: &[body(DEMO, 16)],
    },
    SlideSpec {
        title: title("التحديات والخطط المستقبلية", 28),
        bodies: &[body(CHALLENGES, 14)],
    },
    SlideSpec {
        title: title("Timeline", 36),
        bodies: &[body(TIMELINE, 16)],
    },
    SlideSpec {
        title: TextSpec::new("شكراً لكم", Frame::inches(2.0, 2.0, 6.0, 2.0), 48).centered(),
        bodies: &[
            TextSpec::new(CLOSING_SUBTITLE, Frame::inches(2.0, 4.0, 6.0, 1.0), 24).centered(),
        ],
    },
];

/// Build the pitch deck from the literal slide table.
///
/// Titles are bold in the palette's title color; bodies use the body color.
pub fn build_deck() -> Deck {
    let palette = Palette::AQILHA;
    let mut deck = Deck::new(palette);

    for (i, spec) in SLIDES.iter().enumerate() {
        debug!("Adding slide {}: {}", i + 1, spec.title.text);
        let slide = deck.add_slide();
        slide.add_textbox(
            shape(ShapeRole::Title, &spec.title)
                .color(palette.title)
                .bold(true),
        );
        for body in spec.bodies {
            slide.add_textbox(shape(ShapeRole::Body, body).color(palette.body));
        }
    }

    info!("Built deck with {} slides", deck.len());
    deck
}

fn shape(role: ShapeRole, spec: &TextSpec) -> TextShape {
    TextShape::new(role, spec.frame, spec.text)
        .font_size(spec.font_size)
        .alignment(spec.alignment)
}
