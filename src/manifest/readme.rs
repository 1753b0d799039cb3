use super::descriptor::ProjectDescriptor;

pub const README_FILE: &str = "readme.md";

/// Readme with title, description, install and usage sections
pub fn render_readme(descriptor: &ProjectDescriptor) -> String {
    let name = &descriptor.name;
    [
        format!("# {}", name),
        format!("{}.", descriptor.description),
        "# Installation".to_string(),
        format!("```sh\nnpm i {}\n```\n\n# Usage", name),
        format!("```js\nimport {{}} from \"{}\"\n```\n", name),
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::builder::ManifestBuilder;
    use crate::prompt::AnswerSet;

    #[test]
    fn test_render_readme() {
        let answers: AnswerSet = ["@me/widget", "Widgets for everyone", "a", "me", "MIT"]
            .into_iter()
            .collect();
        let descriptor = ManifestBuilder::new().build(&answers, "");

        let expected = "# @me/widget\n\n\
                        Widgets for everyone.\n\n\
                        # Installation\n\n\
                        ```sh\nnpm i @me/widget\n```\n\n# Usage\n\n\
                        ```js\nimport {} from \"@me/widget\"\n```\n";
        assert_eq!(render_readme(&descriptor), expected);
    }
}
