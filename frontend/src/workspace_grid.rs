use yew::{html, Children, Component, Context, Html, Properties};

/// A printable A4 page split into equal grid cells, one per child.
#[derive(Properties, PartialEq)]
pub struct WorkspaceGridProps {
    #[prop_or(1)]
    pub columns: usize,
    pub rows: usize,
    pub children: Children,
}

pub struct WorkspaceGrid;

impl Component for WorkspaceGrid {
    type Message = ();
    type Properties = WorkspaceGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        WorkspaceGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, 1fr);
             grid-template-rows: repeat({}, 1fr);
             width: 210mm;
             height: 297mm;
             box-sizing: border-box;
             margin: auto;
             padding: 10mm 12mm;
             background: white;
             box-shadow: 0 0 8px #ccc;",
            props.columns, props.rows
        );

        html! {
            <div class="a4-page" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
