//! Hand-authored routing tables. Rule order is significant: overlapping
//! triggers resolve to whichever rule is declared first.

use super::rules::{Outcome, Rule, RuleTable, RuleTableError};

pub(crate) const IMAGING_CLINIC: &str = "التشخيص والأشعة";

/// Content of the user turn recorded when a patient uploads a photo.
pub const IMAGE_UPLOAD_NOTE: &str = "قمت برفع صورة للفحص";

pub(crate) const SYMPTOM_CHECKER_GREETING: &str = "مرحباً {patient}! أنا مساعدك الطبي الذكي. يمكنني مساعدتك في تحديد الحالة الصحية لأسنانك وتوجيهك للعيادة المناسبة. \n\nيمكنك وصف الأعراض التي تعاني منها أو رفع صورة للمنطقة المصابة.";

pub(crate) const FLOATING_TRIAGE_GREETING: &str =
    "مرحباً {patient}! أنا مساعدك الطبي الذكي. كيف يمكنني مساعدتك اليوم؟";

pub(crate) const FAQ_GREETING: &str =
    "مرحباً! أنا Dento، مساعدك الرقمي من عيادة أسنان جامعة الدلتا. كيف يمكنني مساعدتك اليوم؟ 😊";

pub(crate) const FAQ_QUICK_PROMPTS: [&str; 6] = [
    "كيف أحجز موعد؟",
    "ما أسعار الخدمات؟",
    "أين توجد العيادة؟",
    "ما ساعات العمل؟",
    "كيف أدفع الفاتورة؟",
    "هل يوجد تأمين طبي؟",
];

pub(crate) const FLOATING_QUICK_PROMPTS: [&str; 6] =
    ["ألم أسنان", "تسوس", "تبييض", "تقويم", "زراعة", "تنظيف"];

pub(crate) fn symptom_checker() -> Result<RuleTable, RuleTableError> {
    let rules = vec![
        Rule::new(
            ["ألم", "وجع", "تسوس"],
            Outcome::new(
                "العلاج التحفظي وطب وجراحة الجذور",
                "بناءً على الأعراض التي ذكرتها، أنصحك بزيارة عيادة العلاج التحفظي وطب وجراحة الجذور. سيقوم الطبيب بفحص الأسنان المصابة وتحديد العلاج المناسب.",
            ),
        ),
        Rule::new(
            ["لثة", "نزيف", "التهاب اللثة"],
            Outcome::new(
                "اللثة",
                "أعراضك تشير إلى مشكلة في اللثة. أنصحك بزيارة قسم اللثة لفحص الحالة والحصول على العلاج المناسب.",
            ),
        ),
        Rule::new(
            ["تقويم", "اعوجاج", "ترتيب"],
            Outcome::new(
                "تقويم الأسنان",
                "بناءً على وصفك، يبدو أنك بحاجة لزيارة قسم تقويم الأسنان لتقييم الحالة ووضع خطة علاجية مناسبة.",
            ),
        ),
        Rule::new(
            ["زراعة", "سن مفقود", "فقدت"],
            Outcome::new(
                "زراعة الأسنان",
                "أنصحك بزيارة قسم زراعة الأسنان لتقييم إمكانية الزراعة ووضع خطة العلاج.",
            ),
        ),
        Rule::new(
            ["تجميل", "تبييض", "ابتسامة"],
            Outcome::new(
                "تجميل الأسنان",
                "يمكنك زيارة قسم تجميل الأسنان للحصول على استشارة حول تحسين مظهر أسنانك.",
            ),
        ),
        Rule::new(
            ["طفل", "ابني", "ابنتي"],
            Outcome::new(
                "أسنان الأطفال",
                "أنصحك بزيارة قسم أسنان الأطفال المتخصص في علاج ورعاية أسنان الأطفال.",
            ),
        ),
        Rule::new(
            ["خلع", "جراحة", "ضرس العقل"],
            Outcome::new(
                "الجراحة",
                "حالتك تتطلب زيارة قسم الجراحة للتقييم والإجراء الجراحي المناسب.",
            ),
        ),
        Rule::new(
            ["أشعة", "فحص", "تشخيص"],
            Outcome::new(
                IMAGING_CLINIC,
                "أنصحك بزيارة قسم التشخيص والأشعة للحصول على فحص شامل وتحديد الحالة بدقة.",
            ),
        ),
        Rule::new(
            ["تركيبة", "طقم"],
            Outcome::new(
                "التركيبات المتحركة",
                "يمكنك زيارة قسم التركيبات المتحركة لتقييم حالتك والحصول على تركيبة مناسبة.",
            ),
        ),
    ];

    RuleTable::new(
        rules,
        Outcome::new(
            IMAGING_CLINIC,
            "لتحديد حالتك بدقة، أنصحك بزيارة قسم التشخيص والأشعة للحصول على فحص شامل أولاً.",
        ),
    )
}

pub(crate) fn symptom_checker_image() -> Outcome {
    Outcome::new(
        IMAGING_CLINIC,
        "شكراً لرفع الصورة. بناءً على الفحص الأولي للصورة، أنصحك بزيارة قسم التشخيص والأشعة للحصول على تقييم دقيق من قبل الطبيب المختص. يمكن للطبيب إجراء فحص شامل وتحديد العلاج المناسب.",
    )
}

pub(crate) fn floating_triage() -> Result<RuleTable, RuleTableError> {
    let rules = vec![
        Rule::new(
            ["ألم", "وجع", "تسوس", "حشو"],
            Outcome::new(
                "العلاج التحفظي وطب وجراحة الجذور",
                "بناءً على الأعراض، أنصحك بزيارة عيادة العلاج التحفظي. أليك الأطباء المتخصصين المتاحين:",
            )
            .with_referrals(["2"]),
        ),
        Rule::new(
            ["لثة", "نزيف", "التهاب اللثة"],
            Outcome::new(
                "اللثة",
                "أعراضك تشير إلى مشكلة في اللثة. يمكنك حجز موعد مع الأطباء المختصين:",
            )
            .with_referrals(["2"]),
        ),
        Rule::new(
            ["تقويم", "اعوجاج", "تصحيح", "فك"],
            Outcome::new(
                "تقويم الأسنان",
                "يبدو أنك بحاجة لزيارة قسم تقويم الأسنان. اليك الأطباء المتاحين:",
            )
            .with_referrals(["1"]),
        ),
        Rule::new(
            ["زراعة", "غرس", "implant"],
            Outcome::new(
                "زراعة الأسنان",
                "أنصحك بزيارة قسم زراعة الأسنان. اليك الأطباء المتخصصين:",
            )
            .with_referrals(["4"]),
        ),
        Rule::new(
            ["تجميل", "تبييض", "ابتسامة", "مظهر"],
            Outcome::new(
                "تجميل الأسنان",
                "يمكنك زيارة قسم تجميل الأسنان لتحسين مظهر ابتسامتك:",
            )
            .with_referrals(["3"]),
        ),
        Rule::new(
            ["طفل", "ابني", "ابنتي", "صغير"],
            Outcome::new(
                "أسنان الأطفال",
                "أنصحك بزيارة قسم أسنان الأطفال. اليك الأطباء المتخصصين:",
            )
            .with_referrals(["3"]),
        ),
        Rule::new(
            ["خلع", "عملية", "كسر", "حادث"],
            Outcome::new(
                "جراحة الفم والفكين",
                "حالتك تتطلب زيارة قسم جراحة الفم والفكين. اليك جراحونا:",
            )
            .with_referrals(["4"]),
        ),
        Rule::new(
            ["تركيبة", "تاج", "جسر"],
            Outcome::new(
                "التركيبات",
                "أنصحك بزيارة قسم التركيبات. اليك الأطباء المتخصصين:",
            )
            .with_referrals(["2"]),
        ),
        Rule::new(
            ["أشعة", "صورة", "فحص", "تشخيص"],
            Outcome::new(
                IMAGING_CLINIC,
                "أنصحك بزيارة قسم التشخيص والأشعة لإجراء الفحص الشامل:",
            )
            .with_referrals(["1"]),
        ),
    ];

    RuleTable::new(
        rules,
        Outcome::new(
            IMAGING_CLINIC,
            "أنصحك بزيارة قسم التشخيص والأشعة للفحص الشامل. اليك الأطباء المتاحين:",
        )
        .with_referrals(["1"]),
    )
}

pub(crate) fn floating_triage_image() -> Outcome {
    Outcome::new(
        IMAGING_CLINIC,
        "شكراً لرفع الصورة. أنصحك بزيارة قسم التشخيص والأشعة للتقييم الدقيق.",
    )
}

pub(crate) fn faq() -> Result<RuleTable, RuleTableError> {
    let rules = vec![
        Rule::new(
            ["حجز"],
            Outcome::new(
                "booking",
                "يمكنك حجز موعد من خلال قسم المواعيد في التطبيق. اختر العيادة والطبيب والتاريخ والوقت المناسب لك. 📅",
            ),
        ),
        Rule::new(
            ["أسعار"],
            Outcome::new(
                "pricing",
                "تختلف الأسعار حسب نوع الخدمة. الفحص العام 100 ج.م، التنظيف العميق 200 ج.م، الحشو التجميلي 250 ج.م. 💰",
            ),
        ),
        Rule::new(
            ["عيادة"],
            Outcome::new(
                "location",
                "نحن موجودون في جامعة الدلتا للعلوم والتكنولوجيا، كلية طب الأسنان. 📍",
            ),
        ),
        Rule::new(
            ["ساعات"],
            Outcome::new(
                "hours",
                "نعمل من الساعة 8 صباحاً إلى 8 مساءً من السبت إلى الخميس. الجمعة عطلة. ⏰",
            ),
        ),
        Rule::new(
            ["دفع"],
            Outcome::new(
                "payment",
                "يمكنك الدفع بالبطاقة الائتمانية، المحفظة الرقمية، أو التحويل البنكي. 💳",
            ),
        ),
        Rule::new(
            ["تأمين"],
            Outcome::new(
                "insurance",
                "نقبل معظم شركات التأمين الطبي. تواصل معنا للتأكد من قبول تأمينك. 🏥",
            ),
        ),
        Rule::new(
            ["طبيب"],
            Outcome::new(
                "doctors",
                "لدينا فريق متخصص من الأطباء ذوي خبرة طويلة. يمكنك اختيار الطبيب من قسم الأطباء. 👨‍⚕️",
            ),
        ),
        Rule::new(
            ["موعد"],
            Outcome::new(
                "rescheduling",
                "لإلغاء أو تعديل موعدك، تواصل معنا قبل 24 ساعة من الموعد. 📞",
            ),
        ),
        Rule::new(
            ["شكاوى"],
            Outcome::new(
                "complaints",
                "هناك قسم دعم متخصص لتلقي شكاواك واقتراحاتك. نقدّر ملاحظاتك! 💬",
            ),
        ),
    ];

    RuleTable::new(
        rules,
        Outcome::uncategorized("شكراً لسؤالك! هل هناك شيء آخر يمكنني مساعدتك فيه؟"),
    )
}
