// ABOUTME: Compiles a naming request into the natural-language instruction sent to the model
// ABOUTME: Category template, request context lines, and the universal style/format suffix

use std::fmt::Write;

use namecraft_core::{
    validate_request, NameCategory, NamingRequest, NamingTarget, Style, ValidationError,
    CANDIDATE_COUNT,
};

use crate::templates::template_for;

/// Build the prompt for a request. Pure and deterministic.
pub fn compile(request: &NamingRequest) -> Result<String, ValidationError> {
    validate_request(request)?;

    let category = request.category();
    let template = template_for(category);

    let mut prompt = String::new();
    push_line(&mut prompt, template.persona);
    push_line(
        &mut prompt,
        &format!(
            "请根据以下要求推荐 {} 个优秀的{}：",
            CANDIDATE_COUNT,
            category.label()
        ),
    );

    push_line(
        &mut prompt,
        &format!("- {}: {}", category.subject_label(), request.subject()),
    );
    match &request.target {
        NamingTarget::Person {
            gender, birth_year, ..
        } => {
            push_line(&mut prompt, &format!("- 性别: {}", gender.label()));
            if let Some(year) = birth_year {
                push_line(&mut prompt, &format!("- 出生年份: {}", year));
            }
        }
        NamingTarget::Pet { gender, .. } => {
            push_line(&mut prompt, &format!("- 宠物性别: {}", gender.label()));
        }
        NamingTarget::Company { .. } | NamingTarget::Brand { .. } => {}
    }
    push_line(&mut prompt, &format!("- 风格倾向: {}", request.style.label()));
    push_line(&mut prompt, &format!("- 用户额外要求: {}", request.preferences));

    prompt.push('\n');
    push_line(&mut prompt, "要求：");

    let mut requirements: Vec<String> = template
        .requirements
        .iter()
        .map(|r| r.to_string())
        .collect();

    if let Some(year) = request.target.birth_year() {
        requirements.push(format!(
            "结合出生年份 {} 年兼顾五行平衡，并在 elements 中列出名字对应的五行。",
            year
        ));
    }

    if request.style == Style::Poetic {
        requirements.push(
            "结合用户要求的风格，请务必在 source 中提供具体的经典古诗词出处。".to_string(),
        );
    } else {
        requirements.push("结合用户要求的风格。".to_string());
    }
    if category != NameCategory::Person {
        requirements.push("请在 source 中注明命名的设计灵感来源。".to_string());
    }
    requirements.push(format!(
        "结果请严格按 JSON 格式返回：一个包含 {} 个对象的数组，每个对象包含 fullName、meaning、source（可选）、elements（字符串数组）、analysis 字段。",
        CANDIDATE_COUNT
    ));

    for (index, requirement) in requirements.iter().enumerate() {
        let _ = writeln!(prompt, "{}. {}", index + 1, requirement);
    }

    Ok(prompt)
}

fn push_line(buf: &mut String, line: &str) {
    buf.push_str(line);
    buf.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use namecraft_core::Gender;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_person_prompt_layout() {
        let request = NamingRequest::person("张", Gender::Male, Some(2024), Style::Poetic)
            .with_preferences("希望名字里带水");

        let prompt = compile(&request).unwrap();
        let lines: Vec<&str> = prompt.lines().collect();

        assert_eq!(
            lines[0],
            "你是一位精通中国传统文化、文学、音韵学和姓名学的取名大师。"
        );
        assert_eq!(lines[1], "请根据以下要求推荐 6 个优秀的人名：");
        assert_eq!(lines[2], "- 姓氏: 张");
        assert_eq!(lines[3], "- 性别: 男");
        assert_eq!(lines[4], "- 出生年份: 2024");
        assert_eq!(lines[5], "- 风格倾向: 诗词出处");
        assert_eq!(lines[6], "- 用户额外要求: 希望名字里带水");
    }

    #[test]
    fn test_requirements_are_numbered_in_order() {
        let request = NamingRequest::company("科技", Style::Professional);
        let prompt = compile(&request).unwrap();

        let numbered: Vec<&str> = prompt
            .lines()
            .skip_while(|line| *line != "要求：")
            .skip(1)
            .collect();

        assert!(numbered[0].starts_with("1. 名称简洁易记"));
        assert!(numbered.last().unwrap().starts_with("6. 结果请严格按 JSON 格式返回"));
    }

    #[test]
    fn test_pet_prompt_mentions_pet_gender() {
        let request = NamingRequest::pet("李", Gender::Female, Style::Natural);
        let prompt = compile(&request).unwrap();

        assert!(prompt.contains("- 主人姓氏: 李"));
        assert!(prompt.contains("- 宠物性别: 女"));
        assert!(prompt.contains("宠物命名专家"));
    }

    #[test]
    fn test_birth_year_ignored_without_one() {
        let request = NamingRequest::person("王", Gender::Unisex, None, Style::Modern);
        let prompt = compile(&request).unwrap();

        assert!(!prompt.contains("出生年份"));
        assert!(!prompt.contains("五行平衡"));
    }

    #[test]
    fn test_empty_subject_fails_fast() {
        let request = NamingRequest::person("", Gender::Male, None, Style::Classic);
        assert!(compile(&request).is_err());
    }
}
