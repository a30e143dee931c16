// ABOUTME: Category-specific prompt templates
// ABOUTME: Persona framing and quality requirements for each naming category

use namecraft_core::NameCategory;

/// Fixed parts of the prompt that depend only on the category
#[derive(Debug)]
pub struct PromptTemplate {
    pub persona: &'static str,
    pub requirements: &'static [&'static str],
}

static PERSON: PromptTemplate = PromptTemplate {
    persona: "你是一位精通中国传统文化、文学、音韵学和姓名学的取名大师。",
    requirements: &[
        "名字必须悦耳动听，读音和谐。",
        "寓意深远，能够体现中国文化的底蕴。",
    ],
};

static COMPANY: PromptTemplate = PromptTemplate {
    persona: "你是一位资深的品牌战略顾问和商业命名专家，熟悉各行业的市场定位与命名规律。",
    requirements: &[
        "名称简洁易记，便于传播。",
        "契合行业属性，体现专业与可信赖感。",
        "避免生僻字，便于注册与口头传播。",
    ],
};

static BRAND: PromptTemplate = PromptTemplate {
    persona: "你是一位富有创意的品牌命名专家，擅长为产品打造新颖且有辨识度的品牌名。",
    requirements: &[
        "名称新颖独特，具有辨识度。",
        "具备良好的视觉延展性，便于设计标志与包装。",
    ],
};

static PET: PromptTemplate = PromptTemplate {
    persona: "你是一位贴心的宠物命名专家，擅长为宠物起可爱又好记的名字。",
    requirements: &["名字活泼可爱，富有趣味。", "发音简单，便于日常呼唤。"],
};

pub fn template_for(category: NameCategory) -> &'static PromptTemplate {
    match category {
        NameCategory::Person => &PERSON,
        NameCategory::Company => &COMPANY,
        NameCategory::Brand => &BRAND,
        NameCategory::Pet => &PET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_two_or_three_requirements() {
        for category in NameCategory::ALL {
            let template = template_for(category);
            assert!(!template.persona.is_empty());
            assert!(
                (2..=3).contains(&template.requirements.len()),
                "{} has {} requirements",
                category,
                template.requirements.len()
            );
        }
    }

    #[test]
    fn test_business_categories_have_business_personas() {
        assert!(template_for(NameCategory::Company).persona.contains("商业命名"));
        assert!(template_for(NameCategory::Brand).persona.contains("品牌命名"));
    }
}
