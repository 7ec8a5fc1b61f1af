use ratatui::{prelude::*, style::Stylize, widgets::*};

/// A scatter plot of one metric over generations
pub struct Plot {
    pub x_title: String,
    pub y_title: String,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    x_labels: Vec<String>,
    y_labels: Vec<String>,
    data: Vec<(f64, f64)>,
}

impl Plot {
    pub fn new(y_label: &str) -> Self {
        Self {
            x_title: String::from("Generation"),
            y_title: String::from(y_label),
            x_bounds: [f64::MAX, f64::MIN],
            y_bounds: [f64::MAX, f64::MIN],
            x_labels: Vec::new(),
            y_labels: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Grow the axes to include `point` and append it
    pub fn update(&mut self, point: (f64, f64)) {
        let (x, y) = point;
        let grow = |bounds: &mut [f64; 2], v: f64| {
            let changed = v < bounds[0] || v > bounds[1];
            bounds[0] = bounds[0].min(v);
            bounds[1] = bounds[1].max(v);
            changed
        };

        if grow(&mut self.x_bounds, x) {
            self.x_labels = labels(self.x_bounds);
        }
        if grow(&mut self.y_bounds, y) {
            self.y_labels = labels(self.y_bounds);
        }

        self.data.push(point);
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn labels(bounds: [f64; 2]) -> Vec<String> {
    bounds.iter().map(|v| format!("{v:.2}")).collect()
}

fn axis(title: &str, labels: &[String], bounds: [f64; 2]) -> Axis<'static> {
    Axis::default()
        .title(title.to_owned())
        .dark_gray()
        .labels(labels.iter().cloned().map(|l| l.bold()).collect())
        .bounds(bounds)
}

impl Widget for &Plot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Plots")
            .padding(Padding::uniform(4));

        if self.is_empty() {
            Paragraph::new("Finish a training generation to see data")
                .dark_gray()
                .block(block)
                .render(area, buf);
            return;
        }

        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Scatter)
            .cyan()
            .data(&self.data);

        Chart::new(vec![dataset])
            .block(block)
            .x_axis(axis(&self.x_title, &self.x_labels, self.x_bounds))
            .y_axis(axis(&self.y_title, &self.y_labels, self.y_bounds))
            .render(area, buf);
    }
}

/// Per-generation training metrics, one tab per metric
pub struct Plots {
    plot_names: Vec<&'static str>,
    plots: Vec<Plot>,
    selected: usize,
}

impl Plots {
    pub fn new(names: Vec<&'static str>) -> Self {
        let plots = names.iter().map(|k| Plot::new(k)).collect();
        Self {
            plot_names: names,
            plots,
            selected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.plot_names.len()
    }

    pub fn next_plot(&mut self) {
        self.selected = (self.selected + 1) % self.len()
    }

    pub fn prev_plot(&mut self) {
        let len = self.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Append one value per plot, in the order the names were given
    pub fn update(&mut self, generation: u32, data: &[f64]) {
        for (plot, metric) in self.plots.iter_mut().zip(data) {
            plot.update((generation as f64, *metric));
        }
    }

    /// Forget every recorded point
    pub fn clear(&mut self) {
        self.plots = self.plot_names.iter().map(|k| Plot::new(k)).collect();
    }
}

impl Widget for &Plots {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Tabs::new(self.plot_names.iter().copied())
            .block(Block::default().padding(Padding::uniform(2)))
            .white()
            .highlight_style(Style::default().light_green())
            .select(self.selected)
            .render(area, buf);

        if let Some(plot) = self.plots.get(self.selected) {
            plot.render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_grow_with_data() {
        let mut plot = Plot::new("Score");
        assert!(plot.is_empty());
        plot.update((1.0, 12.0));
        plot.update((2.0, 40.0));
        plot.update((3.0, 5.0));
        assert_eq!(plot.x_bounds, [1.0, 3.0]);
        assert_eq!(plot.y_bounds, [5.0, 40.0]);
        assert_eq!(plot.y_labels, ["5.00", "40.00"]);
    }

    #[test]
    fn plots_cycle() {
        let mut plots = Plots::new(vec!["Score", "Epsilon"]);
        plots.prev_plot();
        assert_eq!(plots.selected, 1, "Wraps backwards");
        plots.next_plot();
        assert_eq!(plots.selected, 0, "Wraps forwards");

        plots.update(1, &[10.0, 0.3]);
        assert_eq!(plots.plots[1].data, [(1.0, 0.3)]);
        plots.clear();
        assert!(plots.plots.iter().all(Plot::is_empty));
    }
}
