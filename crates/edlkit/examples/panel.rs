//! Build a small pump panel and print it, or save and preview it.
//!
//! ```text
//! cargo run --example panel                 # print the EDL
//! cargo run --example panel -- pumps.edl    # save it
//! cargo run --example panel -- --show       # open it in EDM
//! ```

use edlkit::edlkit_core::logging::DisplayScene;
use edlkit::prelude::*;

fn pump(scene: &mut Scene, name: &str, pv: &str) -> Result<NodeId> {
    let stack = scene.create_stacked();
    let body = scene.create_widget(
        Widget::circle(format!("{name}_body"))
            .with_size(40, 40)
            .with_attribute("fill", true)
            .with_attribute("visibility", Visibility::new(format!("{pv}:RUN"))),
    );
    let tag = scene.create_widget(
        Widget::text(format!("{name}_label"), name)
            .with_size(30, 14)
            .with_attribute("font", Font::new().with_size(10).with_bold(true)),
    );
    scene.add_widget(stack, body)?;
    scene.add_widget(stack, tag)?;
    Ok(stack)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edlkit=info".into()),
        )
        .init();

    let config = DesignerConfig::discover()?;
    let mut designer = Designer::with_config(&config)?;
    designer.screen_mut().set_attribute("title", "Pumps");

    let scene = designer.scene_mut();
    let panel = scene.create_vbox();
    scene.set_alignment(panel, Alignment::Center)?;

    let title = scene.create_widget(Widget::text("title", "Roughing Pumps").with_size(160, 24));
    scene.add_widget(panel, title)?;

    let row = scene.create_hbox();
    scene.set_spacing(row, 20)?;
    scene.set_alignment(row, Alignment::Center)?;
    for (name, pv) in [("P1", "VAC:P1"), ("P2", "VAC:P2"), ("P3", "VAC:P3")] {
        let stack = pump(scene, name, pv)?;
        scene.add_layout(row, stack)?;
    }
    scene.add_layout(panel, row)?;
    scene.move_to(panel, 20, 20);

    tracing::debug!("\n{}", DisplayScene::new(scene));
    designer.add_widget(panel)?;

    match std::env::args().nth(1).as_deref() {
        Some("--show") => {
            let status = designer
                .show(&LaunchOptions::new().with_macro("AREA", "VAC"))?
                .wait()
                .map_err(|source| DesignerError::Launch {
                    program: designer.viewer().program.clone(),
                    source,
                })?;
            println!("viewer exited with {status}");
        }
        Some(path) => {
            let path = designer.save(path)?;
            println!("wrote {}", path.display());
        }
        None => println!("{}", designer.render()?),
    }
    Ok(())
}
