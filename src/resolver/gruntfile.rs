//! Gruntfile rendering.
//!
//! The style-compile task, its watch target, the Karma framework and the
//! list of loaded plugins depend on the selection; everything else in the
//! Gruntfile is fixed template text.

use crate::config::{resolve_string, TemplateContext};
use crate::error::Result;
use crate::selection::{CssFramework, SelectionState};
use crate::templates;

use super::GRUNTFILE_TEMPLATE;

/// A Grunt plugin loaded with `grunt.loadNpmTasks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GruntPlugin {
    pub package: &'static str,
    pub version: &'static str,
}

const BASE_PLUGINS: [GruntPlugin; 6] = [
    GruntPlugin {
        package: "grunt-contrib-connect",
        version: "~0.7.1",
    },
    GruntPlugin {
        package: "grunt-contrib-copy",
        version: "~0.5.0",
    },
    GruntPlugin {
        package: "grunt-contrib-jshint",
        version: "~0.10.0",
    },
    GruntPlugin {
        package: "grunt-contrib-requirejs",
        version: "~0.4.4",
    },
    GruntPlugin {
        package: "grunt-contrib-watch",
        version: "~0.6.1",
    },
    GruntPlugin {
        package: "grunt-karma",
        version: "~0.8.3",
    },
];

/// Grunt task compiling the stylesheet, if the framework needs one.
pub fn style_task_name(css: CssFramework) -> Option<&'static str> {
    match css {
        CssFramework::Compass => Some("compass"),
        CssFramework::SassBootstrap => Some("sass"),
        CssFramework::NativeBootstrap => None,
    }
}

fn style_plugin(css: CssFramework) -> Option<GruntPlugin> {
    match css {
        CssFramework::Compass => Some(GruntPlugin {
            package: "grunt-contrib-compass",
            version: "~0.8.0",
        }),
        CssFramework::SassBootstrap => Some(GruntPlugin {
            package: "grunt-sass",
            version: "~0.12.1",
        }),
        CssFramework::NativeBootstrap => None,
    }
}

/// Plugins the Gruntfile loads, in load order.
pub fn plugins(selection: &SelectionState) -> Vec<GruntPlugin> {
    let mut plugins = BASE_PLUGINS.to_vec();
    plugins.extend(style_plugin(selection.css_framework()));
    plugins
}

fn style_task_block(css: CssFramework) -> &'static str {
    match css {
        CssFramework::Compass => concat!(
            "        compass: {\n",
            "            options: {\n",
            "                sassDir: '<%= yeoman.app %>/styles',\n",
            "                cssDir: '<%= yeoman.app %>/styles',\n",
            "                importPath: '<%= yeoman.app %>/bower_components',\n",
            "                relativeAssets: false\n",
            "            },\n",
            "            dist: {}\n",
            "        },\n",
        ),
        CssFramework::SassBootstrap => concat!(
            "        sass: {\n",
            "            options: {\n",
            "                includePaths: ['<%= yeoman.app %>/bower_components']\n",
            "            },\n",
            "            dist: {\n",
            "                files: {\n",
            "                    '<%= yeoman.app %>/styles/style.css': '<%= yeoman.app %>/styles/style.scss'\n",
            "                }\n",
            "            }\n",
            "        },\n",
        ),
        CssFramework::NativeBootstrap => "",
    }
}

fn style_watch_block(css: CssFramework) -> String {
    match style_task_name(css) {
        Some(task) => format!(
            concat!(
                "            styles: {{\n",
                "                files: ['<%= yeoman.app %>/styles/{{,*/}}*.scss'],\n",
                "                tasks: ['{}']\n",
                "            }},\n",
            ),
            task
        ),
        None => String::new(),
    }
}

fn task_list(tasks: &[&str]) -> String {
    tasks
        .iter()
        .map(|t| format!("'{}'", t))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render `Gruntfile.js`.
pub fn render(selection: &SelectionState) -> Result<String> {
    let css = selection.css_framework();
    let style_task = style_task_name(css);

    let npm_tasks: String = plugins(selection)
        .iter()
        .map(|p| format!("    grunt.loadNpmTasks('{}');\n", p.package))
        .collect();

    let mut server_tasks: Vec<&str> = style_task.into_iter().collect();
    server_tasks.extend(["connect:livereload", "watch"]);

    let mut build_tasks: Vec<&str> = style_task.into_iter().collect();
    build_tasks.extend(["requirejs", "copy:dist"]);

    let context = TemplateContext::new()
        .with_app_name(selection.app_name())
        .with_fragment("style_watch", style_watch_block(css))
        .with_fragment("style_task", style_task_block(css))
        .with_fragment("test_framework", selection.test_framework().name())
        .with_fragment("npm_tasks", npm_tasks)
        .with_fragment("server_tasks", task_list(&server_tasks))
        .with_fragment("build_tasks", task_list(&build_tasks));

    resolve_string(templates::get_text(GRUNTFILE_TEMPLATE)?, &context)
}
