use serde::{Deserialize, Serialize};
use crate::models::actor::Actor;
use crate::models::line::Line;

/// 场景。名字可以为空（没有场景标题的剧本会生成一个无名场景）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    name: String,
    /// 在剧本场景列表中的位置，从 0 开始
    number: usize,
    lines: Vec<Line>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Scene {
            name: name.into(),
            number: 0,
            lines: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub(crate) fn set_number(&mut self, number: usize) {
        self.number = number;
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// 直接修改行内容（启用标记、文本等）。增删行请用 insert_line/remove_line
    pub fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn add_line(&mut self, mut line: Line) {
        line.order = self.lines.len();
        self.lines.push(line);
    }

    pub fn add_action(&mut self, text: impl Into<String>) {
        self.add_line(Line::new(Actor::action(), text));
    }

    /// 在 index 处插入，超出范围时追加到末尾
    pub fn insert_line(&mut self, index: usize, line: Line) {
        let index = index.min(self.lines.len());
        self.lines.insert(index, line);
        self.renumber();
    }

    pub fn remove_line(&mut self, index: usize) -> Option<Line> {
        if index >= self.lines.len() {
            return None;
        }
        let removed = self.lines.remove(index);
        self.renumber();
        Some(removed)
    }

    pub fn move_line(&mut self, from: usize, to: usize) -> bool {
        if from >= self.lines.len() || to >= self.lines.len() {
            return false;
        }
        let line = self.lines.remove(from);
        self.lines.insert(to, line);
        self.renumber();
        true
    }

    /// 把 order 重新对齐到行的实际位置
    pub fn renumber(&mut self) {
        for (i, line) in self.lines.iter_mut().enumerate() {
            line.order = i;
        }
    }

    pub(crate) fn last_line_mut(&mut self) -> Option<&mut Line> {
        self.lines.last_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new("INT. A CREEPY BASEMENT");
        let jason = Actor::new("JASON");
        scene.add_line(Line::new(jason.clone(), "hello world"));
        scene.add_action("Jason whips off his sunglasses");
        scene.add_line(Line::new(jason, "my name is Jason"));
        scene
    }

    fn orders(scene: &Scene) -> Vec<usize> {
        scene.lines().iter().map(|l| l.order).collect()
    }

    #[test]
    fn test_add_line_assigns_order() {
        let scene = sample_scene();
        assert_eq!(orders(&scene), vec![0, 1, 2]);
        assert!(scene.lines()[1].is_action());
    }

    #[test]
    fn test_insert_and_remove_renumber() {
        let mut scene = sample_scene();
        scene.insert_line(1, Line::new(Actor::action(), ""));
        assert_eq!(orders(&scene), vec![0, 1, 2, 3]);
        assert_eq!(scene.lines()[1].text(), "");

        let removed = scene.remove_line(0).unwrap();
        assert_eq!(removed.text(), "hello world");
        assert_eq!(orders(&scene), vec![0, 1, 2]);
        assert!(scene.remove_line(10).is_none());
    }

    #[test]
    fn test_move_line() {
        let mut scene = sample_scene();
        assert!(scene.move_line(2, 0));
        assert_eq!(scene.lines()[0].text(), "my name is Jason");
        assert_eq!(orders(&scene), vec![0, 1, 2]);
        assert!(!scene.move_line(0, 5));
    }
}
