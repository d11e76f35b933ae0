//! Template materialization: the component's file set as a rule.

use tracing::debug;

use crate::{
    application::{ports::TemplateRenderer, rules::Rule},
    domain::{FileRole, NormalizedPlan, RelativePath, TemplateFile, TemplateSet},
    error::FragmentResult,
};

/// Render the template set for `plan` and return a rule that writes it
/// under `<source_root>/<directory>/`.
///
/// Rendering happens here, so template errors surface before any rule is
/// applied. The tree is never read.
pub fn materialize_template(
    plan: &NormalizedPlan,
    templates: &TemplateSet,
    renderer: &dyn TemplateRenderer,
) -> FragmentResult<Rule> {
    let context = plan.render_context();
    let target_dir = plan.component_dir();
    let mut files = Vec::new();

    for file in templates.files.iter().filter(|f| is_emitted(f, plan)) {
        let rendered_path = renderer.render(&file.path, &file.path, &context)?;
        let mut path = target_dir.join(rendered_path.trim());
        if plan.js {
            path = to_js_path(&path);
        }
        let content = renderer.render(&file.path, file.content.as_str(), &context)?;
        debug!(path = %path, role = %file.role, "Rendered template file");
        files.push((path, content));
    }

    Ok(Rule::transform("materialize", move |tree| {
        for (path, content) in files {
            tree.write(path, content);
        }
        Ok(())
    }))
}

fn is_emitted(file: &TemplateFile, plan: &NormalizedPlan) -> bool {
    match file.role {
        FileRole::Component => true,
        FileRole::Spec => !plan.skip_tests,
        FileRole::Stylesheet => plan.styled_module.is_none() && plan.has_styles,
    }
}

/// `.tsx` and `.ts` become `.js`; anything else is left alone.
fn to_js_path(path: &RelativePath) -> RelativePath {
    match path.extension() {
        Some("tsx" | "ts") => path.with_extension("js"),
        _ => path.clone(),
    }
}
