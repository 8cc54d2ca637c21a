//! User-facing copy and menu labels

pub(crate) const LABEL_INFO: &str = "Информация о школе";
pub(crate) const LABEL_FILL: &str = "Заполнить заявку";
pub(crate) const LABEL_BACK: &str = "Назад";
pub(crate) const LABEL_EXIT: &str = "Выйти";
pub(crate) const LABEL_CANCEL: &str = "Отмена";

pub(crate) const GREETING: &str =
    "Привет! Это бот по приему заявок на участие в проекте SCP School.\nВыбери действие:";
pub(crate) const BACK_TO_MENU: &str = "Ты вернулся в меню.\nВыбери действие:";
pub(crate) const FORM_CANCELLED: &str = "Ты вышел из заполнения анкеты. Выбери действие:";
pub(crate) const CHOOSE_FROM_MENU: &str = "Пожалуйста, выбери действие из меню.";
pub(crate) const SUBMITTED: &str =
    "Спасибо! Твоя заявка была принята.\n\nТы снова в меню. Выбери действие:";
pub(crate) const SUBMIT_FAILED: &str = "Не удалось сохранить заявку, ответы сохранены. \
     Отправь последний ответ ещё раз, чтобы повторить, или нажми «Отмена».";
pub(crate) const CONVERSATION_CLOSED: &str =
    "До встречи! Чтобы начать заново, отправь /start.";
pub(crate) const NOT_STARTED: &str = "Чтобы начать, отправь /start.";
pub(crate) const UNKNOWN_COMMAND: &str = "Неизвестная команда. Доступны /start и /cancel.";
pub(crate) const EMPTY_ANSWER: &str = "Ответ не может быть пустым.";

pub(crate) const PROMPT_FULL_NAME: &str = "Напиши свое ФИО:";
pub(crate) const PROMPT_USERNAME: &str = "Отлично! Теперь напиши свой Telegram username (без @):";
pub(crate) const PROMPT_GROUP: &str = "Напиши номер своей группы:";
pub(crate) const PROMPT_LEVEL: &str = "Выбери уровень владения программированием:";
pub(crate) const PROMPT_DIRECTION: &str = "В какой сфере ты бы хотел преподавать?";
pub(crate) const PROMPT_LANGUAGES: &str = "Какие языки программирования ты знаешь?";
pub(crate) const PROMPT_MOTIVATION: &str = "Почему ты хочешь участвовать в проекте SCP School?";
pub(crate) const PROMPT_EXPERIENCE: &str =
    "Есть ли у тебя опыт работы с детьми или преподавания?";

pub(crate) const LEVEL_OPTIONS: &[&str] = &[
    "Основы",
    "Уверенный уровень",
    "Проходил стажировки / работал в сфере",
];
pub(crate) const DIRECTION_OPTIONS: &[&str] = &["Frontend", "Backend"];

pub(crate) const SCHOOL_INFO: &str = "🌍 Миссия:\n\n\
SCP School — это больше, чем школа программирования. Это проект, который меняет жизни. \
Мы даём подросткам из семей с разным социально-экономическим положением шанс войти в мир IT: \
пройти путь от первых строк кода до уверенной разработки собственных приложений.\n\
Каждый урок — это маленький шаг к большим мечтам.\n\n\
📚 Как устроено обучение:\n\n\
1) Обучение построено как длительная, последовательная программа: мы ведём школьников от базовых \
навыков к уверенной разработке через регулярную практику, проекты и поддержку наставников.\n\n\
2) Занятия проходят оффлайн по субботам, 1,5 часа (40 мин теория + 40 мин практика).\n\n\
3) В группе — до 10 учеников, чтобы преподаватель мог работать с каждым и не терять контакт с группой.\n\n\
4) Каждую неделю ученики получают домашние задания, а преподаватели сопровождают их и поддерживают онлайн.\n\n\
👩‍🏫 Роль преподавателя:\n\n\
Ты ведёшь занятия по программе (теория + практика): объясняешь материал простым языком, \
помогаешь ученикам по ходу практики и следишь за тем, чтобы группа двигалась в одном темпе.\n\n\
Домашние задания проверяешь заранее, а между уроками держишь обратную связь с учениками: \
отвечаешь на вопросы и помогаешь не выпадать из процесса.\n\n\
🎁 Что ты получишь:\n\n\
1) 📈 SSCI и IROS.\n\n\
2) 🎓 Сертификат от AITU с указанием часов преподавания.\n\n\
3) 🗣 Прокачаешь навыки коммуникации, работы в команде и лидерства.\n\n\
4) 💡 Ценный опыт преподавания, который оценят работодатели.\n\n\
5) ❤️ Главное — почувствуешь, что ты реально меняешь чью-то жизнь.\n\n\
💡 Кого мы ищем:\n\n\
1) Студентов, готовых преподавать frontend или backend разработку.\n\n\
2) Тех, кто умеет говорить простыми словами о сложных вещах.\n\n\
3) Людей, которым важно развитие других так же, как и собственное.\n\n\
4) И особенно ценится опыт работы с детьми — он помогает лучше понимать учеников и находить с ними общий язык.";
